use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-class scores as returned by the service. They are displayed as-is and
/// are not required to sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub label: SentimentLabel,
    pub confidence: f64,
    pub scores: SentimentScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(deserialize_with = "scalar_as_string")]
    pub text: String,
    pub label: SentimentLabel,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<SentimentScores>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvBatchResult {
    pub results: Vec<CsvRow>,
}

// The service echoes the raw CSV cell, which is not always a string
// (numeric cells, empty cells as null).
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A CSV file picked by the user, held in memory for upload.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), bytes }
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, crate::core::SentimentError> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload.csv")
            .to_string();

        Ok(Self { file_name, bytes })
    }
}

pub const BAR_LABELS: [&str; 3] = ["Positive", "Neutral", "Negative"];

/// Chart input for a single result. Values are always in `[pos, neu, neg]`
/// order, whatever the winning label is.
#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    pub title: &'static str,
    pub labels: [&'static str; 3],
    pub values: [f64; 3],
    pub colors: [[u8; 4]; 3],
}

pub fn bar_data(scores: &SentimentScores) -> BarData {
    BarData {
        title: "Sentiment Confidence Scores",
        labels: BAR_LABELS,
        values: [scores.pos, scores.neu, scores.neg],
        colors: [
            [34, 197, 94, 179],   // green
            [156, 163, 175, 179], // gray
            [239, 68, 68, 179],   // red
        ],
    }
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
