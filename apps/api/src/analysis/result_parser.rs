//! Result parser: turns the model's markdown analysis into a typed report.
//!
//! The response text is model-generated and only loosely structured, so the
//! parser never fails on content: a missing score parses as `None` and a
//! missing section as an empty string. Parsing is two independent passes
//! (ordered header matching, then span slicing) plus one score search.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The three section labels recognized in an analysis response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLabel {
    MatchSummary,
    TopRequirements,
    Suggestions,
}

impl SectionLabel {
    fn from_header(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "match summary" => Some(SectionLabel::MatchSummary),
            "top requirements" => Some(SectionLabel::TopRequirements),
            "suggestions" => Some(SectionLabel::Suggestions),
            _ => None,
        }
    }
}

/// Parsed analysis report.
///
/// All four fields are always present regardless of how malformed the input
/// is. The report is constructed fresh on every parse call and owned by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Compatibility score out of 100, if the response contained one.
    pub score: Option<u32>,
    pub summary: String,
    pub top_requirements: String,
    pub suggestions: String,
}

/// A recognized section header occurrence, in text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderMatch {
    label: SectionLabel,
    /// Byte offset where the header match begins. Bounds the previous
    /// section's content span.
    header_start: usize,
    /// Byte offset immediately after the header match. The section's
    /// content begins here.
    content_start: usize,
}

/// Parses markdown analysis text into an [`AnalysisReport`].
///
/// Section headers may appear in any order, in any casing, wrapped in zero
/// to two `*` on either side. Any subset of the sections may be absent. If
/// a label occurs more than once, the first occurrence's span wins and
/// later occurrences are ignored. Intended behavior, driven by the ordered
/// match list with one slot per label.
pub fn parse_analysis_markdown(markdown: &str) -> AnalysisReport {
    let score = extract_score(markdown);
    let headers = find_section_headers(markdown);
    let sections = slice_sections(markdown, &headers);

    let mut summary: Option<&str> = None;
    let mut top_requirements: Option<&str> = None;
    let mut suggestions: Option<&str> = None;

    for (label, content) in sections {
        let slot = match label {
            SectionLabel::MatchSummary => &mut summary,
            SectionLabel::TopRequirements => &mut top_requirements,
            SectionLabel::Suggestions => &mut suggestions,
        };
        // First occurrence wins.
        if slot.is_none() {
            *slot = Some(content);
        }
    }

    AnalysisReport {
        score,
        summary: summary.unwrap_or_default().to_string(),
        top_requirements: top_requirements.unwrap_or_default().to_string(),
        suggestions: suggestions.unwrap_or_default().to_string(),
    }
}

/// Searches the whole text for `Score: <n>/<d>`, optionally wrapped in `*`
/// emphasis, and returns the numerator. The denominator anchors the match
/// but its value is not validated. No match is not an error.
fn extract_score(text: &str) -> Option<u32> {
    let score_re = Regex::new(r"\*{0,2}Score:\s*(\d+)/\d+").expect("valid regex");
    score_re
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Match pass: every recognized header occurrence with its offsets, in the
/// order they appear in the text (not a fixed canonical order).
fn find_section_headers(text: &str) -> Vec<HeaderMatch> {
    let header_re = Regex::new(r"(?i)\*{0,2}(Match Summary|Top Requirements|Suggestions):\*{0,2}")
        .expect("valid regex");
    header_re
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = SectionLabel::from_header(&caps[1])?;
            Some(HeaderMatch {
                label,
                header_start: whole.start(),
                content_start: whole.end(),
            })
        })
        .collect()
}

/// Slicing pass: each header's content span runs from its content start to
/// the start of the next header of any label, or to end of text, trimmed.
fn slice_sections<'a>(text: &'a str, headers: &[HeaderMatch]) -> Vec<(SectionLabel, &'a str)> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let end = headers
                .get(i + 1)
                .map_or(text.len(), |next| next.header_start);
            (header.label, text[header.content_start..end].trim())
        })
        .collect()
}
