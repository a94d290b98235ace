//! PDF text extraction.
//!
//! Wraps the `pdf-extract` crate. Pages are read in document order; a page
//! that yields no extractable text (a scanned image, for example) contributes
//! nothing instead of failing the whole document.

use super::ExtractError;

/// Extracts plain text from PDF bytes, joining per-page text with newlines.
/// Malformed or corrupt bytes surface as `DocumentUnreadable`, never as a
/// silent empty result.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(content).map_err(|e| {
        ExtractError::DocumentUnreadable {
            reason: format!("PDF parse failed: {e}"),
        }
    })?;

    Ok(pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Builds a structurally valid single-page PDF whose page carries an empty
/// content stream. Object offsets in the xref table are computed from the
/// assembled body so the file parses without repair.
#[cfg(test)]
pub(crate) fn minimal_pdf_with_empty_page() -> Vec<u8> {
    let objects = [
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
        "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> /Contents 4 0 R >>\nendobj\n",
        "4 0 obj\n<< /Length 0 >>\nstream\n\nendstream\nendobj\n",
    ];

    let mut body = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for object in objects {
        offsets.push(body.len());
        body.push_str(object);
    }

    let xref_offset = body.len();
    body.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    body.push_str("0000000000 65535 f \n");
    for offset in offsets {
        body.push_str(&format!("{offset:010} 00000 n \n"));
    }
    body.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));

    body.into_bytes()
}
