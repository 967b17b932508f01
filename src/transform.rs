use once_cell::sync::Lazy;
use regex::Regex;

use crate::labels::{Labels, Locale};
use crate::suite::FlattenedCase;

// Best-effort tag stripper. Literal `<`/`>` in text are stripped along with tags.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("<.*?>").expect("tag pattern is a valid regex"));

/// Converts TestLink rich text into plain multi-line text.
///
/// Paragraph and line-break tags become newlines, `&nbsp;` becomes a space, every
/// other tag-like substring is removed, and the result is trimmed. `None` yields
/// an empty string.
pub fn sanitize(markup: Option<&str>) -> String {
    let Some(text) = markup else {
        return String::new();
    };
    let text = text
        .replace("<p>", "\n")
        .replace("</p>", "\n")
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("&nbsp;", " ");
    TAG_PATTERN.replace_all(&text, "").trim().to_string()
}

/// Maps a TestLink importance code to a ZenTao priority.
///
/// TestLink ranks `1` as highest, ZenTao ranks `3` as highest. Anything outside
/// the table, including a missing code, is medium.
pub fn remap_priority(importance: Option<&str>) -> &'static str {
    match importance {
        Some("1") => "3",
        Some("2") => "2",
        Some("3") => "1",
        other => {
            if let Some(code) = other {
                log::debug!("unknown importance code {:?}, using medium priority", code);
            }
            "2"
        }
    }
}

/// One row of the ZenTao import file.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct OutputRecord {
    pub module: String,
    pub title: String,
    pub preconditions: String,
    pub steps_text: String,
    pub expected_text: String,
    pub keywords: String,
    pub priority: String,
    pub case_type: String,
    pub phase: String,
    /// Only filled on the first record of a file.
    pub type_option_list: String,
    /// Only filled on the first record of a file.
    pub phase_option_list: String,
}

/// Maps flattened cases to output records.
pub struct RecordTransformer {
    labels: &'static Labels,
}

impl RecordTransformer {
    pub fn new(locale: Locale) -> Self {
        RecordTransformer {
            labels: locale.labels(),
        }
    }

    /// Transforms the case at position `index` of its file.
    pub fn transform(&self, index: usize, flattened: &FlattenedCase) -> OutputRecord {
        let case = &flattened.case;

        let preconditions = match sanitize(case.preconditions_html.as_deref()) {
            p if p.is_empty() => sanitize(case.summary_html.as_deref()),
            p => p,
        };

        let steps_text = Self::numbered(
            case.steps
                .iter()
                .map(|s| sanitize(s.actions_html.as_deref())),
        );
        let expected_text = Self::numbered(
            case.steps
                .iter()
                .map(|s| sanitize(s.expected_html.as_deref())),
        );

        let (type_option_list, phase_option_list) = if index == 0 {
            (
                self.labels.case_type_option_list(),
                self.labels.phase_option_list(),
            )
        } else {
            (String::new(), String::new())
        };

        OutputRecord {
            module: flattened.module_path.clone(),
            title: case.title.clone(),
            preconditions,
            steps_text,
            expected_text,
            keywords: String::new(),
            priority: remap_priority(case.importance.as_deref()).to_string(),
            case_type: self.labels.case_type.to_string(),
            phase: self.labels.phase.to_string(),
            type_option_list,
            phase_option_list,
        }
    }

    /// Transforms all cases of one file, in order.
    pub fn transform_all(&self, cases: &[FlattenedCase]) -> Vec<OutputRecord> {
        cases
            .iter()
            .enumerate()
            .map(|(index, case)| self.transform(index, case))
            .collect()
    }

    // Numbers lines by position; `step_number` from the source is not consulted.
    fn numbered(lines: impl Iterator<Item = String>) -> String {
        lines
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}
