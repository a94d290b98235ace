//! DOCX text extraction.
//!
//! Walks the document's paragraphs in order and concatenates run text,
//! mirroring how the container stores visible content. Blank paragraphs are
//! skipped before joining.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Extracts paragraph text from DOCX bytes, joining non-blank paragraphs
/// with newlines in document order.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(content).map_err(|e| ExtractError::DocumentUnreadable {
        reason: format!("DOCX parse failed: {e}"),
    })?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            if !text.trim().is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Packs the given paragraph texts into an in-memory DOCX file.
#[cfg(test)]
pub(crate) fn docx_from_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .expect("in-memory docx should pack");
    buffer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_joined_in_document_order() {
        let bytes = docx_from_paragraphs(&["Jane Doe", "Education", "Skills"]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nEducation\nSkills");
    }

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let bytes = docx_from_paragraphs(&["Jane Doe", "", "   ", "Skills"]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSkills");
    }

    #[test]
    fn test_empty_document_yields_empty_text() {
        let bytes = docx_from_paragraphs(&[]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_corrupt_bytes_are_document_unreadable() {
        let err = extract_text(b"zip? what zip").unwrap_err();
        match err {
            ExtractError::DocumentUnreadable { reason } => {
                assert!(reason.contains("DOCX parse failed"));
            }
            other => panic!("expected DocumentUnreadable, got {other:?}"),
        }
    }
}
