pub mod app;
pub mod chart;
pub mod results_table;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::SentimentApp;
