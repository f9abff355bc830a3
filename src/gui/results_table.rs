use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        format_confidence,
        CsvRow,
    },
    gui::theme::Theme,
};

const RESULTS_TABLE_HEIGHT: f32 = 320.0;
const TABLE_TEXT_COLUMN_WIDTH: f32 = 260.0;
const TABLE_LABEL_COLUMN_WIDTH: f32 = 90.0;
const TABLE_HEADER_HEIGHT: f32 = 22.0;
const TABLE_ROW_HEIGHT: f32 = 20.0;

pub struct CsvResultsTable;

impl CsvResultsTable {
    pub fn show(ui: &mut egui::Ui, rows: &[CsvRow], theme: &Theme) {
        let ctx = ui.ctx().clone();

        egui::ScrollArea::vertical()
            .id_salt("csv_results_scroll")
            .max_height(RESULTS_TABLE_HEIGHT)
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::initial(TABLE_TEXT_COLUMN_WIDTH).resizable(true).clip(true))
                    .column(Column::initial(TABLE_LABEL_COLUMN_WIDTH).resizable(true))
                    .column(Column::remainder())
                    .header(TABLE_HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            ui.strong("Text");
                        });
                        header.col(|ui| {
                            ui.strong("Sentiment");
                        });
                        header.col(|ui| {
                            ui.strong("Confidence");
                        });
                    })
                    .body(|body| {
                        body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                            let entry = &rows[row.index()];
                            row.col(|ui| {
                                ui.add(egui::Label::new(&entry.text).truncate())
                                    .on_hover_text(&entry.text);
                            });
                            row.col(|ui| {
                                ui.label(theme.label(&ctx, entry.label));
                            });
                            row.col(|ui| {
                                ui.label(format_confidence(entry.confidence));
                            });
                        });
                    });
            });
    }
}

/// Plain-text rendering of the table, one line per row, for clipboard export.
pub fn rows_as_tsv(rows: &[CsvRow]) -> String {
    let mut out = String::from("Text\tSentiment\tConfidence\n");
    for row in rows {
        let text = row.text.replace(['\t', '\n', '\r'], " ");
        out.push_str(&format!("{}\t{}\t{}\n", text, row.label, format_confidence(row.confidence)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SentimentLabel;

    #[test]
    fn test_rows_as_tsv() {
        let rows = vec![
            CsvRow {
                text: "a".to_string(),
                label: SentimentLabel::Neutral,
                confidence: 0.5,
                scores: None,
            },
            CsvRow {
                text: "b\tc".to_string(),
                label: SentimentLabel::Negative,
                confidence: 0.8,
                scores: None,
            },
        ];

        let tsv = rows_as_tsv(&rows);
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Text\tSentiment\tConfidence");
        assert_eq!(lines[1], "a\tNeutral\t50.0%");
        assert_eq!(lines[2], "b c\tNegative\t80.0%");
    }

    #[test]
    fn test_rows_as_tsv_empty() {
        assert_eq!(rows_as_tsv(&[]), "Text\tSentiment\tConfidence\n");
    }
}
