use crate::core::http::DEFAULT_API_BASE;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_base: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(), dark_mode: true }
    }
}
