mod modals;
mod panels;

use eframe::egui;
use modals::Modals;
use tracing::{
    info,
    warn,
};

use super::{
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    api::SentimentClient,
    core::{
        forms::AnalysisForms,
        http::DEFAULT_API_BASE,
        tasks::{
            TaskManager,
            TaskResult,
        },
        SentimentError,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const SETTINGS_FILE: &str = "settings.json";
const CONTENT_MAX_WIDTH: f32 = 640.0;
const BUTTON_HEIGHT: f32 = 32.0;

pub struct SentimentApp {
    // Form State
    pub forms: AnalysisForms,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    pub modals: Modals,

    // External Services
    client: SentimentClient,
    task_manager: TaskManager,
}

impl SentimentApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SentimentError> {
        let mut settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let client = match SentimentClient::new(&settings_data.api_base) {
            Ok(client) => client,
            Err(e) => {
                warn!("Stored API base rejected ({e}), falling back to {DEFAULT_API_BASE}");
                settings_data.api_base = DEFAULT_API_BASE.to_string();
                SentimentClient::new(DEFAULT_API_BASE)?
            }
        };
        info!(api_base = client.api_base(), "Using sentiment service");

        let task_manager = TaskManager::new()?.with_repaint(cc.egui_ctx.clone());

        let app = Self {
            forms: AnalysisForms::new(),
            settings_data,
            theme: Theme::default(),
            modals: Modals::default(),
            client,
            task_manager,
        };

        app.setup_theme(cc);

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if self.settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!("Failed to save settings: {e}");
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::TextAnalysis { ticket, result } => {
                self.forms.complete_text(ticket, result);
            }
            TaskResult::CsvAnalysis { ticket, result } => {
                self.forms.complete_csv(ticket, result);
            }
        }
    }

    fn submit_text(&mut self) {
        if let Some((ticket, text)) = self.forms.submit_text() {
            self.task_manager.analyze_text(self.client.clone(), ticket, text);
        }
    }

    fn submit_csv(&mut self) {
        if let Some((ticket, path)) = self.forms.submit_csv() {
            self.task_manager.analyze_csv(self.client.clone(), ticket, path);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        match SentimentClient::new(&settings.api_base) {
            Ok(client) => {
                info!(api_base = client.api_base(), "Sentiment service changed");
                self.client = client;
                self.settings_data = settings;
                self.save_settings();
            }
            Err(e) => warn!("Rejected settings: {e}"),
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn text_form(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Enter text for sentiment analysis:").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.forms.text_input)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        let button = egui::Button::new("Analyze Text")
            .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
        if ui.add_enabled(self.forms.can_submit_text(), button).clicked() {
            self.submit_text();
        }

        panels::form_status(ui, &self.theme, self.forms.text.is_loading(), self.forms.text.error());

        if let Some(result) = self.forms.text.result() {
            panels::text_result(ui, &self.theme, result);
        }
    }

    fn csv_form(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Upload CSV for batch analysis (must have a 'text' column):")
                .strong(),
        );

        ui.horizontal(|ui| {
            if ui.button("Choose File…").clicked() {
                if let Some(path) =
                    rfd::FileDialog::new().add_filter("CSV files", &["csv"]).pick_file()
                {
                    self.forms.selected_file = Some(path);
                }
            }

            match &self.forms.selected_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name).on_hover_text(path.display().to_string());
                }
                None => {
                    ui.weak("No file chosen");
                }
            }
        });

        let button = egui::Button::new("Analyze CSV")
            .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
        if ui.add_enabled(self.forms.can_submit_csv(), button).clicked() {
            self.submit_csv();
        }

        panels::form_status(ui, &self.theme, self.forms.csv.is_loading(), self.forms.csv.error());

        if let Some(rows) = self.forms.csv.result() {
            panels::csv_results(ui, &self.theme, rows);
        }
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.sync_dark_mode(ctx);

        if let Some(action) = TopBar::show(ctx, self.client.api_base(), self.forms.any_loading()) {
            match action {
                TopBarAction::OpenServiceSettings => {
                    self.modals.api_settings.open_settings(self.settings_data.clone());
                }
            }
        }

        if let Some(settings) = self.modals.api_settings.show(ctx) {
            self.apply_settings(settings);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(panels::SECTION_SPACING);
                    ui.label(self.theme.title(ui.ctx(), "SentimentSense"));
                    ui.add_space(panels::SECTION_SPACING);

                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        self.text_form(ui);
                        ui.add_space(panels::SECTION_SPACING);
                        ui.separator();
                        ui.add_space(panels::SECTION_SPACING);
                        self.csv_form(ui);
                    });
                });
            });
        });
    }
}
