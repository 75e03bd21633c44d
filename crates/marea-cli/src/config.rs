// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use marea_app::{Theme, ViewKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "marea";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub data: Data,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            data: Data::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub theme: Option<String>,
    pub start_view: Option<String>,
    pub sticky_header: Option<bool>,
    pub sort_icons: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            theme: Some(Theme::Light.as_str().to_owned()),
            start_view: Some(ViewKind::Orders.label().to_owned()),
            sticky_header: Some(true),
            sort_icons: Some(true),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub table_path: Option<String>,
    pub conversation_path: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("MAREA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set MAREA_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui] and [data]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(theme) = &self.ui.theme
            && Theme::parse(theme).is_none()
        {
            bail!(
                "ui.theme in {} must be \"light\" or \"dark\", got {:?}",
                path.display(),
                theme
            );
        }

        if let Some(view) = &self.ui.start_view
            && ViewKind::parse(view).is_none()
        {
            bail!(
                "ui.start_view in {} must be \"orders\" or \"conversation\", got {:?}",
                path.display(),
                view
            );
        }

        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.ui
            .theme
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(Theme::Light)
    }

    pub fn start_view(&self) -> ViewKind {
        self.ui
            .start_view
            .as_deref()
            .and_then(ViewKind::parse)
            .unwrap_or(ViewKind::Orders)
    }

    pub fn sticky_header(&self) -> bool {
        self.ui.sticky_header.unwrap_or(true)
    }

    pub fn sort_icons(&self) -> bool {
        self.ui.sort_icons.unwrap_or(true)
    }

    pub fn table_path(&self) -> Option<PathBuf> {
        if let Some(path) = env::var_os("MAREA_TABLE_PATH") {
            return Some(PathBuf::from(path));
        }
        self.data.table_path.as_deref().map(PathBuf::from)
    }

    pub fn conversation_path(&self) -> Option<PathBuf> {
        if let Some(path) = env::var_os("MAREA_CONVERSATION_PATH") {
            return Some(PathBuf::from(path));
        }
        self.data.conversation_path.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# marea config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\ntheme = \"light\"\nstart_view = \"orders\"\nsticky_header = true\nsort_icons = true\n\n[data]\n# Optional. Built-in demo fixtures are used when these are unset.\n# table_path = \"/absolute/path/to/orders.json\"\n# conversation_path = \"/absolute/path/to/conversation.json\"\n",
            path.display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use marea_app::{Theme, ViewKind};
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.start_view(), ViewKind::Orders);
        assert!(config.sticky_header());
        assert!(config.sort_icons());
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\ntheme = \"dark\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui] and [data]"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 7\n")?;
        let error = Config::load(&path).expect_err("v7 config should fail");
        assert!(error.to_string().contains("unsupported config version 7"));
        Ok(())
    }

    #[test]
    fn full_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\ntheme = \"dark\"\nstart_view = \"conversation\"\nsticky_header = false\nsort_icons = false\n[data]\ntable_path = \"/data/orders.json\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.start_view(), ViewKind::Conversation);
        assert!(!config.sticky_header());
        assert!(!config.sort_icons());
        assert_eq!(
            config.table_path(),
            Some(PathBuf::from("/data/orders.json")),
        );
        assert_eq!(config.conversation_path(), None);
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn invalid_theme_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\ntheme = \"sepia\"\n")?;
        let error = Config::load(&path).expect_err("bad theme should fail");
        assert!(error.to_string().contains("ui.theme"));
        Ok(())
    }

    #[test]
    fn invalid_start_view_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_view = \"dashboard\"\n")?;
        let error = Config::load(&path).expect_err("bad view should fail");
        assert!(error.to_string().contains("ui.start_view"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("MAREA_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("MAREA_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn table_path_prefers_env_override() -> Result<()> {
        let _guard = env_lock();
        let (_temp, path) =
            write_config("version = 1\n[data]\ntable_path = \"/from/config.json\"\n")?;
        let config = Config::load(&path)?;

        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("MAREA_TABLE_PATH", "/from/env.json");
        }
        let resolved = config.table_path();
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("MAREA_TABLE_PATH");
        }
        assert_eq!(resolved, Some(PathBuf::from("/from/env.json")));
        Ok(())
    }

    #[test]
    fn example_config_includes_required_sections() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("[data]"));
        Ok(())
    }
}
