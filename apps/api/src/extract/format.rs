use super::ExtractError;

/// Supported document container formats, resolved once at the pipeline
/// boundary from the declared filename. Never re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    Docx,
}

impl Format {
    /// Resolves the format from the lowercase filename suffix. A filename
    /// without a dot reports its whole name as the offending extension,
    /// matching what the client actually declared.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(Format::Pdf),
            "docx" => Ok(Format::Docx),
            _ => Err(ExtractError::UnsupportedFormat { extension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_resolves() {
        assert_eq!(Format::from_filename("resume.pdf").unwrap(), Format::Pdf);
    }

    #[test]
    fn test_docx_extension_resolves() {
        assert_eq!(Format::from_filename("resume.docx").unwrap(), Format::Docx);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(Format::from_filename("Resume.PDF").unwrap(), Format::Pdf);
        assert_eq!(Format::from_filename("CV.Docx").unwrap(), Format::Docx);
    }

    #[test]
    fn test_txt_extension_is_unsupported() {
        let err = Format::from_filename("resume.txt").unwrap_err();
        match err {
            ExtractError::UnsupportedFormat { extension } => assert_eq!(extension, "txt"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_filename_without_dot_is_unsupported() {
        let err = Format::from_filename("resume").unwrap_err();
        match err {
            ExtractError::UnsupportedFormat { extension } => assert_eq!(extension, "resume"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_only_last_suffix_counts() {
        assert_eq!(
            Format::from_filename("resume.docx.pdf").unwrap(),
            Format::Pdf
        );
    }
}
