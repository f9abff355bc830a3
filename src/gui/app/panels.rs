use eframe::egui;

use crate::{
    core::{
        bar_data,
        format_confidence,
        CsvRow,
        SentimentResult,
    },
    gui::{
        chart::SentimentChart,
        results_table::{
            rows_as_tsv,
            CsvResultsTable,
        },
        theme::Theme,
    },
};

pub const SECTION_SPACING: f32 = 24.0;
const SMALL_SPACING: f32 = 6.0;

pub fn form_status(ui: &mut egui::Ui, theme: &Theme, loading: bool, error: Option<&str>) {
    if let Some(error) = error {
        ui.add_space(SMALL_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(theme.error(ui.ctx(), error));
        });
    }

    if loading {
        ui.add_space(SMALL_SPACING);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(egui::RichText::new("Analyzing...").color(theme.accent(ui.ctx())).strong());
            });
        });
    }
}

pub fn text_result(ui: &mut egui::Ui, theme: &Theme, result: &SentimentResult) {
    ui.add_space(SECTION_SPACING / 2.0);
    ui.label(theme.heading(ui.ctx(), "Result").size(18.0));

    ui.horizontal(|ui| {
        ui.label(theme.label(ui.ctx(), result.label).size(16.0));
        ui.add_space(12.0);
        ui.weak(format!("Confidence: {}", format_confidence(result.confidence)));
    });

    ui.add_space(SMALL_SPACING);
    ui.vertical_centered(|ui| {
        ui.add(SentimentChart::new(&bar_data(&result.scores)));
    });
}

pub fn csv_results(ui: &mut egui::Ui, theme: &Theme, rows: &[CsvRow]) {
    ui.add_space(SECTION_SPACING / 2.0);
    ui.horizontal(|ui| {
        ui.label(theme.heading(ui.ctx(), "CSV Results").size(18.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Copy").on_hover_text("Copy table as TSV").clicked() {
                ui.ctx().copy_text(rows_as_tsv(rows));
            }
            ui.weak(format!("{} rows", rows.len()));
        });
    });

    ui.add_space(SMALL_SPACING);
    CsvResultsTable::show(ui, rows, theme);
}
