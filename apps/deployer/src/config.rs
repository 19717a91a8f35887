use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub ligo_cmd: String,
    pub src_dir: String,
    pub out_dir: String,
    pub deployer_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ligo_cmd: "ligo".into(),
            src_dir: "ligo/src".into(),
            out_dir: "ligo/out".into(),
            deployer_url: None,
        }
    }
}

/// Defaults, overridden by `deployer.toml`, overridden by environment
/// variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("deployer.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("ligo_cmd") {
                settings.ligo_cmd = v.clone();
            }
            if let Some(v) = file_cfg.get("src_dir") {
                settings.src_dir = v.clone();
            }
            if let Some(v) = file_cfg.get("out_dir") {
                settings.out_dir = v.clone();
            }
            if let Some(v) = file_cfg.get("deployer_url") {
                settings.deployer_url = Some(v.clone());
            }
        }
    }

    if let Ok(v) = std::env::var("LIGO_CMD") {
        settings.ligo_cmd = v;
    }
    if let Ok(v) = std::env::var("LIGO_SRC_DIR") {
        settings.src_dir = v;
    }
    if let Ok(v) = std::env::var("LIGO_OUT_DIR") {
        settings.out_dir = v;
    }
    if let Ok(v) = std::env::var("DEPLOYER_URL") {
        settings.deployer_url = Some(v);
    }

    settings
}
