pub mod errors;
pub mod forms;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::SentimentError;
pub use models::{
    bar_data,
    format_confidence,
    BarData,
    CsvBatchResult,
    CsvRow,
    CsvUpload,
    SentimentLabel,
    SentimentResult,
    SentimentScores,
};
