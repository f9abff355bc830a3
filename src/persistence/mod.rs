use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::SentimentError;

const APP_NAME: &str = "sentimentsense";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), SentimentError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), SentimentError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    info!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, SentimentError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_from(&get_data_file_path(filename))
}

pub fn load_json_or_default_from<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> T {
    match load_json_from::<T>(file_path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", file_path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::settings::SettingsData;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings: SettingsData = load_json_or_default_from(&temp_path("missing"));
        assert_eq!(settings, SettingsData::default());
        assert_eq!(settings.api_base, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("settings");
        let settings =
            SettingsData { api_base: "http://10.0.0.5:9000".to_string(), dark_mode: false };

        save_json_to(&settings, &path).unwrap();
        let loaded: SettingsData = load_json_from(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        assert!(load_json_from::<SettingsData>(&path).is_err());
        let settings: SettingsData = load_json_or_default_from(&path);
        assert_eq!(settings, SettingsData::default());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{"dark_mode": false}"#).unwrap();

        let settings: SettingsData = load_json_from(&path).unwrap();
        assert_eq!(settings.api_base, "http://127.0.0.1:8000");
        assert!(!settings.dark_mode);

        let _ = fs::remove_file(path);
    }
}
