pub mod api_settings_modal;
pub mod data;

pub use api_settings_modal::ApiSettingsModal;
pub use data::SettingsData;
