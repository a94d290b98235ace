//! Schema defaulting and limits for segmented output.

use crate::extract::segment::RawFieldMap;
use crate::models::resume::ResumeRecord;

/// Upper bound on the summary field, in characters.
pub const SUMMARY_MAX_CHARS: usize = 1500;

/// Applies schema defaults and limits to a raw field map. Total: any input
/// yields a fully-populated record, never an error. Absent name/summary
/// become empty strings, absent sections empty lists, and the summary is cut
/// at a character boundary, never mid-codepoint.
pub fn assemble(raw: RawFieldMap) -> ResumeRecord {
    ResumeRecord {
        name: raw.name.unwrap_or_default(),
        summary: truncate_chars(raw.summary.unwrap_or_default(), SUMMARY_MAX_CHARS),
        education: raw.education,
        experience: raw.experience,
        skills: raw.skills,
    }
}

fn truncate_chars(s: String, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => s[..byte_index].to_string(),
        None => s,
    }
}
