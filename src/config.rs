use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Поддерживаемые значения `window_manager.backend`
pub const BACKENDS: &[&str] = &["auto", "qtile", "sway", "i3", "xdotool", "wmctrl"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub selector: SelectorConfig,
    pub window_manager: WindowManagerConfig,
    /// Каталог, относительно которого разрешаются пути селектора
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectorConfig {
    pub binary: PathBuf,
    pub subcommand: String,
    pub style_file: PathBuf,
    pub bindings_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowManagerConfig {
    pub backend: String,
    #[serde(default)]
    pub qtile_socket: Option<PathBuf>,
    pub ipc_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            selector: SelectorConfig {
                binary: PathBuf::from("../target/debug/commando"),
                subcommand: "select".to_string(),
                style_file: PathBuf::from("select.css"),
                bindings_file: PathBuf::from("root.json5"),
            },
            window_manager: WindowManagerConfig {
                backend: "auto".to_string(),
                qtile_socket: None,
                ipc_timeout_ms: 5000,
            },
            base_dir: None,
        }
    }
}

impl Config {
    /// Загружает конфигурацию: значения по умолчанию, затем TOML-файл
    /// (если задан), затем переменные окружения `COMMANDO_FOCUS_*`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            if !path.exists() {
                anyhow::bail!("Файл конфигурации не найден: {:?}", path);
            }
            figment = figment.merge(Toml::file(path));
        }

        let figment = figment.merge(Env::prefixed("COMMANDO_FOCUS_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        if self.selector.binary.as_os_str().is_empty() {
            anyhow::bail!("Не указан путь к селектору (selector.binary)");
        }

        if self.selector.subcommand.is_empty() {
            anyhow::bail!("Пустая подкоманда селектора (selector.subcommand)");
        }

        if !BACKENDS.contains(&self.window_manager.backend.as_str()) {
            anyhow::bail!(
                "Неизвестный оконный менеджер: {} (допустимо: {})",
                self.window_manager.backend,
                BACKENDS.join(", ")
            );
        }

        if self.window_manager.ipc_timeout_ms == 0 {
            anyhow::bail!("ipc_timeout_ms должно быть больше 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.selector.subcommand, "select");
        assert_eq!(config.selector.style_file, PathBuf::from("select.css"));
        assert_eq!(config.selector.bindings_file, PathBuf::from("root.json5"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.window_manager.backend = "kwin".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.window_manager.ipc_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    const SWAY_TOML: &str = r#"
base_dir = "/opt/commando/config"

[window_manager]
backend = "sway"
"#;

    #[test]
    fn test_load_merges_toml_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("commando-focus.toml", SWAY_TOML)?;

            let config = Config::load(Some(Path::new("commando-focus.toml")))
                .map_err(|e| e.to_string())?;

            assert_eq!(config.window_manager.backend, "sway");
            assert_eq!(config.window_manager.ipc_timeout_ms, 5000);
            assert_eq!(config.base_dir, Some(PathBuf::from("/opt/commando/config")));
            assert_eq!(config.selector.binary, PathBuf::from("../target/debug/commando"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file("commando-focus.toml", SWAY_TOML)?;
            jail.set_env("COMMANDO_FOCUS_WINDOW_MANAGER__BACKEND", "i3");
            jail.set_env("COMMANDO_FOCUS_WINDOW_MANAGER__IPC_TIMEOUT_MS", "250");
            jail.set_env("COMMANDO_FOCUS_SELECTOR__SUBCOMMAND", "pick");

            let config = Config::load(Some(Path::new("commando-focus.toml")))
                .map_err(|e| e.to_string())?;

            assert_eq!(config.window_manager.backend, "i3");
            assert_eq!(config.window_manager.ipc_timeout_ms, 250);
            assert_eq!(config.selector.subcommand, "pick");
            assert_eq!(config.base_dir, Some(PathBuf::from("/opt/commando/config")));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_env_value_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("COMMANDO_FOCUS_WINDOW_MANAGER__BACKEND", "kwin");
            assert!(Config::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
