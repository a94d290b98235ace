//! Heuristic section segmentation of canonical résumé text.
//!
//! Partitions the text into candidate zones using positional and keyword
//! anchors: the first non-header line is the name, recognized section
//! headers delimit blocks, and content inside each block is parsed by
//! delimiter splitting. Pure and total for any well-formed string: absence
//! of structure yields an empty-but-valid field map, never an error.

use crate::models::resume::{EducationEntry, ExperienceEntry};

/// Intermediate segmentation output. Same shape as `ResumeRecord`, but
/// `name` and `summary` may be absent and lists may be empty; schema
/// defaulting happens in the assembler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFieldMap {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Education,
    Experience,
    Skills,
}

/// Recognized section header keywords. Multi-word aliases come before their
/// single-word prefixes so "work experience" never half-matches.
const HEADERS: &[(&str, Section)] = &[
    ("work experience", Section::Experience),
    ("employment history", Section::Experience),
    ("experience", Section::Experience),
    ("education", Section::Education),
    ("skills", Section::Skills),
    ("summary", Section::Summary),
    ("objective", Section::Summary),
    ("about me", Section::Summary),
    ("about", Section::Summary),
];

/// Leading glyphs stripped from bulleted block content.
const BULLET_GLYPHS: &[char] = &['•', '-', '*', '‣', '·'];

/// Segments canonical text into raw résumé fields.
///
/// A header is only recognized at the start of a line, so when two headers
/// share a line the earlier one wins and the rest of the line (later
/// keyword included) is content of that section until the next header
/// line. Block lines that parse to nothing usable are discarded.
pub fn segment(text: &str) -> RawFieldMap {
    let mut raw = RawFieldMap::default();
    let mut current: Option<Section> = None;
    let mut summary_lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((section, rest)) = match_header(line) {
            current = Some(section);
            if !rest.is_empty() {
                ingest_line(&mut raw, &mut summary_lines, section, rest);
            }
            continue;
        }

        match current {
            // Header zone: first line is the name, the rest of the
            // unlabeled opening block reads as a summary/objective.
            None => {
                if raw.name.is_none() {
                    raw.name = Some(line.to_string());
                } else {
                    summary_lines.push(line.to_string());
                }
            }
            Some(section) => ingest_line(&mut raw, &mut summary_lines, section, line),
        }
    }

    if !summary_lines.is_empty() {
        raw.summary = Some(summary_lines.join("\n"));
    }
    raw
}

fn ingest_line(
    raw: &mut RawFieldMap,
    summary_lines: &mut Vec<String>,
    section: Section,
    line: &str,
) {
    let line = line.trim_start_matches(BULLET_GLYPHS).trim();
    if line.is_empty() {
        return;
    }
    match section {
        Section::Summary => summary_lines.push(line.to_string()),
        Section::Education => {
            if let Some(entry) = parse_education_line(line) {
                raw.education.push(entry);
            }
        }
        Section::Experience => {
            if let Some(entry) = parse_experience_line(line) {
                raw.experience.push(entry);
            }
        }
        Section::Skills => raw.skills.extend(split_skills(line)),
    }
}

/// Matches a recognized header at the start of a line, case-insensitively.
/// Returns the section and the remainder of the line with any separator
/// punctuation stripped. The keyword must end at a word boundary so that
/// e.g. "Skillset Inc." is not taken for a skills header.
fn match_header(line: &str) -> Option<(Section, &str)> {
    for &(keyword, section) in HEADERS {
        if line.len() < keyword.len() || !line.is_char_boundary(keyword.len()) {
            continue;
        }
        if !line[..keyword.len()].eq_ignore_ascii_case(keyword) {
            continue;
        }
        let rest = &line[keyword.len()..];
        if rest.chars().next().is_some_and(char::is_alphanumeric) {
            continue;
        }
        return Some((section, rest.trim_start_matches([':', ' ', '\t']).trim()));
    }
    None
}

/// Parses one education line on comma boundaries into degree, institution
/// and year. The year is the trailing component when it carries a four-digit
/// number; remaining middle components fold into the institution.
fn parse_education_line(line: &str) -> Option<EducationEntry> {
    let mut parts: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let year = if parts.len() > 1 && contains_four_digit_run(parts[parts.len() - 1]) {
        parts.pop().unwrap_or_default().to_string()
    } else {
        String::new()
    };

    Some(EducationEntry {
        degree: parts.remove(0).to_string(),
        institution: parts.join(", "),
        year,
    })
}

/// Parses one experience line on comma boundaries into company, role and
/// duration. The duration is the trailing component when it carries a digit;
/// remaining middle components fold into the role.
fn parse_experience_line(line: &str) -> Option<ExperienceEntry> {
    let mut parts: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return None;
    }

    let duration = if parts.len() > 1
        && parts[parts.len() - 1]
            .chars()
            .any(|c| c.is_ascii_digit())
    {
        parts.pop().unwrap_or_default().to_string()
    } else {
        String::new()
    };

    Some(ExperienceEntry {
        company: parts.remove(0).to_string(),
        role: parts.join(", "),
        duration,
    })
}

/// Splits a skills line on list delimiters, strips bullet glyphs, and drops
/// empties. Source order is preserved; no deduplication.
fn split_skills(line: &str) -> Vec<String> {
    line.split([',', ';', '|', '•', '·'])
        .map(|skill| skill.trim().trim_start_matches(BULLET_GLYPHS).trim())
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

fn contains_four_digit_run(part: &str) -> bool {
    let mut run = 0;
    for c in part.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= 4 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
