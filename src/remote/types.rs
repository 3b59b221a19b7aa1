//! DTOs for the comparison service's JSON responses.

use crate::model::Summary;

fn is_none<T>(v: &Option<T>) -> bool {
    v.is_none()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Success,
    Error,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompareResponse {
    pub message: String,
    pub message_type: MessageType,

    #[serde(default, skip_serializing_if = "is_none")]
    pub output_file: Option<String>,

    #[serde(default, skip_serializing_if = "is_none")]
    pub summary: Option<SummaryView>,
}

impl CompareResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_type: MessageType::Error,
            output_file: None,
            summary: None,
        }
    }
}

/// Summary as it appears in reports: counts plus the formatted score.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SummaryView {
    pub total_lines: usize,
    pub exact_matches: usize,
    pub similar_matches: usize,
    pub differences: usize,
    pub unpaired_lines: usize,
    pub similarity_score: String,
}

impl From<&Summary> for SummaryView {
    fn from(s: &Summary) -> Self {
        Self {
            total_lines: s.total_lines,
            exact_matches: s.exact,
            similar_matches: s.similar,
            differences: s.different,
            unpaired_lines: s.unpaired,
            similarity_score: s.similarity_display(),
        }
    }
}
