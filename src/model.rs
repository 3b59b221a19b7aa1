use serde::{Deserialize, Serialize};

/// Ordered lines of one input file, trailing newline stripped.
pub type LineSequence = Vec<String>;

/// Weight applied to similar lines when computing the similarity score.
pub const SIMILAR_WEIGHT: f64 = 0.9;

/// Text rendered in place of a line that has no counterpart.
pub const MISSING_LINE_TEXT: &str = "[No corresponding line]";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Exact,
    Similar,
    Different,
    Unpaired,
}

impl Classification {
    /// Result name used in rendered reports.
    pub fn result_name(self) -> &'static str {
        match self {
            Classification::Exact => "exact_match",
            Classification::Similar => "similar",
            Classification::Different => "different",
            Classification::Unpaired => "unpaired",
        }
    }

    pub fn confidence(self) -> u32 {
        match self {
            Classification::Exact => 100,
            Classification::Similar => 90,
            Classification::Different | Classification::Unpaired => 0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Classification::Exact => "Lines are identical",
            Classification::Similar => "Lines match after trimming leading/trailing whitespace",
            Classification::Different => "Lines differ",
            Classification::Unpaired => "Line has no counterpart in the other file",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// 1-based position in the alignment.
    pub index: usize,
    pub source: Option<LineRef>,
    pub target: Option<LineRef>,
    pub classification: Classification,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_lines: usize,
    pub exact: usize,
    pub similar: usize,
    pub different: usize,
    pub unpaired: usize,
    pub similarity_score: f64,
}

impl Summary {
    /// Score as a percentage string with one decimal (`"95.0%"`).
    ///
    /// An empty comparison renders as `"0%"`.
    pub fn similarity_display(&self) -> String {
        if self.total_lines == 0 {
            return "0%".to_string();
        }
        format!("{:.1}%", self.similarity_score)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub mappings: Vec<MappingEntry>,
    pub summary: Summary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated_at: String,
    pub tool: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: u8,
    pub name: String,
    pub path: String,
    pub line_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub metadata: Metadata,
    pub files: [FileInfo; 2],
    pub comparison: Comparison,
}

impl Report {
    pub fn source_file(&self) -> &FileInfo {
        &self.files[0]
    }

    pub fn target_file(&self) -> &FileInfo {
        &self.files[1]
    }
}
