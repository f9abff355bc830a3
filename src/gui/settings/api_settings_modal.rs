use eframe::egui;

use super::data::SettingsData;
use crate::core::http::{
    parse_api_base,
    DEFAULT_API_BASE,
};

#[derive(Clone, Default)]
pub struct ApiSettingsData {
    pub api_base_input: String,
    pub original_settings: SettingsData,
}

impl ApiSettingsData {
    pub fn is_dirty(&self) -> bool {
        self.api_base_input.trim() != self.original_settings.api_base
    }

    /// Settings to persist, or the message to show next to the input.
    pub fn validate(&self) -> Result<SettingsData, String> {
        let api_base = parse_api_base(&self.api_base_input).map_err(|e| e.to_string())?;
        Ok(SettingsData { api_base, ..self.original_settings.clone() })
    }
}

pub struct ApiSettingsModal {
    open: bool,
    data: ApiSettingsData,
    status: Option<String>,
}

impl ApiSettingsModal {
    pub fn new() -> Self {
        Self { open: false, data: ApiSettingsData::default(), status: None }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.data.api_base_input = current_settings.api_base.clone();
        self.data.original_settings = current_settings;
        self.status = None;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("api_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Service Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("API base URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.data.api_base_input)
                        .hint_text(DEFAULT_API_BASE)
                        .desired_width(260.0),
                );
            });
            ui.weak("Requests go to <base>/analyze and <base>/analyze_csv");
            ui.add_space(10.0);

            if let Some(status) = &self.status {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, "⚠");
                    ui.label(status);
                });
                ui.add_space(5.0);
            }

            ui.separator();

            let is_dirty = self.data.is_dirty();

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    match self.data.validate() {
                        Ok(settings) => {
                            self.data.original_settings = settings.clone();
                            result = Some(settings);
                            ui.close();
                        }
                        Err(message) => {
                            self.status = Some(message);
                        }
                    }
                } else if cancel_clicked {
                    ui.close();
                } else if reset_clicked {
                    self.data.api_base_input = DEFAULT_API_BASE.to_string();
                    self.status = None;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for ApiSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
