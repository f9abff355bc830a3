use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
};

use eframe::egui;
use tokio::runtime::Runtime;
use tracing::info;

use super::TaskResult;
use crate::{
    api::SentimentClient,
    core::{
        forms::Ticket,
        CsvUpload,
        SentimentError,
    },
};

/// Runs service calls on a background runtime and hands results back to the
/// UI thread through a channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<egui::Context>,
}

impl TaskManager {
    pub fn new() -> Result<Self, SentimentError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, repaint: None })
    }

    /// Wakes the UI whenever a task finishes, so results show up without
    /// waiting for the next input event.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Option<egui::Context>) {
        (self.sender.clone(), self.repaint.clone())
    }

    pub fn analyze_text(&self, client: SentimentClient, ticket: Ticket, text: String) {
        let (sender, repaint) = self.task_context();

        self.runtime.spawn(async move {
            let result = client.analyze_text(&text).await;
            info!(seq = ticket.seq, ok = result.is_ok(), "Text analysis finished");

            let _ = sender.send(TaskResult::TextAnalysis { ticket, result });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    pub fn analyze_csv(&self, client: SentimentClient, ticket: Ticket, path: PathBuf) {
        let (sender, repaint) = self.task_context();

        self.runtime.spawn(async move {
            let result = match CsvUpload::from_path(&path) {
                Ok(upload) => client.analyze_csv(upload).await.map(|batch| batch.results),
                Err(e) => Err(e),
            };
            info!(seq = ticket.seq, ok = result.is_ok(), "CSV analysis finished");

            let _ = sender.send(TaskResult::CsvAnalysis { ticket, result });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;
    use crate::core::forms::FormKind;

    fn wait_for_result(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = manager.poll_results().pop() {
                return result;
            }
            assert!(Instant::now() < deadline, "Timed out waiting for task result");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_text_task_reports_ticket_and_result() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_body(
                r#"{"label":"Negative","confidence":0.6,"scores":{"pos":0.1,"neu":0.3,"neg":0.6}}"#,
            )
            .create();

        let mut manager = TaskManager::new().unwrap();
        let client = SentimentClient::new(&server.url()).unwrap();
        let ticket = Ticket { form: FormKind::Text, seq: 7 };

        manager.analyze_text(client, ticket, "awful".to_string());

        match wait_for_result(&mut manager) {
            TaskResult::TextAnalysis { ticket: got, result } => {
                assert_eq!(got, ticket);
                assert_eq!(result.unwrap().confidence, 0.6);
            }
            other => panic!("Expected text analysis, got {:?}", other),
        }

        mock.assert();
    }

    #[test]
    fn test_csv_task_missing_file_is_io_error() {
        let mut manager = TaskManager::new().unwrap();
        let client = SentimentClient::new("http://127.0.0.1:1").unwrap();
        let ticket = Ticket { form: FormKind::Csv, seq: 1 };
        let path = std::env::temp_dir().join(format!("missing-{}.csv", uuid::Uuid::new_v4()));

        manager.analyze_csv(client, ticket, path);

        let result = wait_for_result(&mut manager);
        assert_eq!(result.task_type(), "csv_analysis");
        assert_eq!(result.ticket(), ticket);
        match result {
            TaskResult::CsvAnalysis { result, .. } => {
                assert!(matches!(result, Err(SentimentError::Io(_))))
            }
            other => panic!("Expected CSV analysis, got {:?}", other),
        }
    }

    #[test]
    fn test_csv_task_uploads_file() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/analyze_csv")
            .match_body(mockito::Matcher::Regex("great product".to_string()))
            .with_status(200)
            .with_body(r#"{"results":[{"text":"great product","label":"Positive","confidence":0.62}]}"#)
            .create();

        let path = std::env::temp_dir().join(format!("reviews-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, "text\ngreat product\n").unwrap();

        let mut manager = TaskManager::new().unwrap();
        let client = SentimentClient::new(&server.url()).unwrap();
        manager.analyze_csv(client, Ticket { form: FormKind::Csv, seq: 2 }, path.clone());

        match wait_for_result(&mut manager) {
            TaskResult::CsvAnalysis { result, .. } => {
                let rows = result.unwrap();
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].text, "great product");
            }
            other => panic!("Expected CSV analysis, got {:?}", other),
        }

        mock.assert();
        let _ = std::fs::remove_file(path);
    }
}
