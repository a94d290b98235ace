//! Text normalization between extraction and segmentation.

/// Canonicalizes extracted text: trims every line, drops lines that are
/// empty after trimming, and joins the survivors with single newlines,
/// preserving relative order. The segmenter never sees leading or trailing
/// blank noise. Idempotent.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
