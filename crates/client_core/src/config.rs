use std::{collections::HashMap, fs};

/// Client settings. The API base URL is the only knob the admin front-end
/// needs; everything else lives server-side.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
        }
    }
}

/// Loads settings with the usual precedence: built-in defaults, then
/// `admin.toml` in the working directory, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("admin.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings
}

/// Joins the configured base URL with a server-relative resource path,
/// normalizing slashes on both sides.
pub fn endpoint_for(api_base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
