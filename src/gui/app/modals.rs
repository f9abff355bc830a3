use crate::gui::settings::ApiSettingsModal;

pub struct Modals {
    pub api_settings: ApiSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { api_settings: ApiSettingsModal::new() }
    }
}
