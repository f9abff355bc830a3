use std::path::PathBuf;

use tracing::{
    debug,
    info,
    warn,
};

use crate::core::{
    CsvRow,
    SentimentError,
    SentimentResult,
};

pub const TEXT_ERROR_MESSAGE: &str = "Error analyzing text.";
pub const CSV_ERROR_MESSAGE: &str = "Error analyzing CSV.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Text,
    Csv,
}

impl FormKind {
    pub fn error_message(&self) -> &'static str {
        match self {
            FormKind::Text => TEXT_ERROR_MESSAGE,
            FormKind::Csv => CSV_ERROR_MESSAGE,
        }
    }
}

/// Identifies one submission. Only the latest ticket of a form may update it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub form: FormKind,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct FormState<T> {
    kind: FormKind,
    status: FormStatus,
    result: Option<T>,
    error: Option<String>,
    latest: Option<Ticket>,
}

impl<T> FormState<T> {
    pub fn new(kind: FormKind) -> Self {
        Self { kind, status: FormStatus::Idle, result: None, error: None, latest: None }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    fn begin(&mut self, seq: u64) -> Ticket {
        let ticket = Ticket { form: self.kind, seq };
        self.status = FormStatus::Submitting;
        self.result = None;
        self.error = None;
        self.latest = Some(ticket);
        ticket
    }

    fn complete(&mut self, ticket: Ticket, outcome: Result<T, SentimentError>) -> Completion {
        if self.latest != Some(ticket) || self.status != FormStatus::Submitting {
            debug!(?ticket, latest = ?self.latest, "Discarding stale response");
            return Completion::Stale;
        }

        match outcome {
            Ok(result) => {
                self.status = FormStatus::Success;
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                warn!(form = ?self.kind, "Analysis failed: {e}");
                self.status = FormStatus::Error;
                self.result = None;
                self.error = Some(self.kind.error_message().to_string());
            }
        }

        Completion::Applied
    }
}

/// Form inputs plus one independent state record per form.
#[derive(Debug)]
pub struct AnalysisForms {
    pub text_input: String,
    pub selected_file: Option<PathBuf>,
    pub text: FormState<SentimentResult>,
    pub csv: FormState<Vec<CsvRow>>,
    next_seq: u64,
}

impl Default for AnalysisForms {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisForms {
    pub fn new() -> Self {
        Self {
            text_input: String::new(),
            selected_file: None,
            text: FormState::new(FormKind::Text),
            csv: FormState::new(FormKind::Csv),
            next_seq: 0,
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn can_submit_text(&self) -> bool {
        !self.text_input.is_empty() && !self.text.is_loading()
    }

    pub fn can_submit_csv(&self) -> bool {
        self.selected_file.is_some() && !self.csv.is_loading()
    }

    /// Starts a text submission. Returns `None` when the text field is empty.
    pub fn submit_text(&mut self) -> Option<(Ticket, String)> {
        if self.text_input.is_empty() {
            return None;
        }

        let seq = self.next_seq();
        let ticket = self.text.begin(seq);
        info!(seq, chars = self.text_input.chars().count(), "Submitting text for analysis");
        Some((ticket, self.text_input.clone()))
    }

    /// Starts a CSV submission. Returns `None` when no file is selected.
    pub fn submit_csv(&mut self) -> Option<(Ticket, PathBuf)> {
        let path = self.selected_file.clone()?;

        let seq = self.next_seq();
        let ticket = self.csv.begin(seq);
        info!(seq, file = %path.display(), "Submitting CSV for analysis");
        Some((ticket, path))
    }

    pub fn complete_text(
        &mut self,
        ticket: Ticket,
        outcome: Result<SentimentResult, SentimentError>,
    ) -> Completion {
        if ticket.form != FormKind::Text {
            return Completion::Stale;
        }
        self.text.complete(ticket, outcome)
    }

    pub fn complete_csv(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<CsvRow>, SentimentError>,
    ) -> Completion {
        if ticket.form != FormKind::Csv {
            return Completion::Stale;
        }
        self.csv.complete(ticket, outcome)
    }

    pub fn any_loading(&self) -> bool {
        self.text.is_loading() || self.csv.is_loading()
    }
}
