//! Document-to-structured-record extraction pipeline.
//!
//! Byte stream → format extractor (chosen by declared extension) → canonical
//! text → section segmenter → record assembler. The pipeline holds no shared
//! state and is safe to invoke from concurrent request handlers.

pub mod assemble;
pub mod docx;
pub mod format;
pub mod handlers;
pub mod normalize;
pub mod pdf;
pub mod segment;

use thiserror::Error;

use crate::extract::format::Format;
use crate::models::resume::ResumeRecord;

/// Errors the pipeline surfaces to its transport collaborator. Both are
/// recoverable by the caller resubmitting a different file; neither is
/// retried internally.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file extension '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("document could not be read: {reason}")]
    DocumentUnreadable { reason: String },
}

/// Runs the full pipeline on one uploaded document.
///
/// Format dispatch happens once at this boundary; an unsupported extension
/// fails before any extractor touches the bytes. A well-formed document of a
/// supported format always yields a fully-populated record, even when no
/// text or structure could be recovered.
pub fn process_document(filename: &str, content: &[u8]) -> Result<ResumeRecord, ExtractError> {
    let text = match Format::from_filename(filename)? {
        Format::Pdf => pdf::extract_text(content)?,
        Format::Docx => docx::extract_text(content)?,
    };

    let canonical = normalize::normalize(&text);
    let raw = segment::segment(&canonical);
    Ok(assemble::assemble(raw))
}
