use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    OpenServiceSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, api_base: &str, busy: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Service Settings").clicked() {
                        action = Some(TopBarAction::OpenServiceSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, api_base, busy);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, api_base: &str, busy: bool) {
        let (color, tooltip) = if busy {
            (egui::Color32::from_rgb(220, 180, 40), "Request in flight")
        } else {
            (egui::Color32::from_rgb(120, 120, 140), "Idle")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small(api_base).on_hover_text("Sentiment service");
        });
    }
}
