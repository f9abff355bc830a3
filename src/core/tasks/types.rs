use crate::core::{
    forms::Ticket,
    CsvRow,
    SentimentError,
    SentimentResult,
};

#[derive(Debug)]
pub enum TaskResult {
    TextAnalysis { ticket: Ticket, result: Result<SentimentResult, SentimentError> },
    CsvAnalysis { ticket: Ticket, result: Result<Vec<CsvRow>, SentimentError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::TextAnalysis { .. } => "text_analysis",
            TaskResult::CsvAnalysis { .. } => "csv_analysis",
        }
    }

    pub fn ticket(&self) -> Ticket {
        match self {
            TaskResult::TextAnalysis { ticket, .. } | TaskResult::CsvAnalysis { ticket, .. } => {
                *ticket
            }
        }
    }
}
