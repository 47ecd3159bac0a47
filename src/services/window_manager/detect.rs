use crate::error::{FocusError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Qtile,
    Sway,
    I3,
    Xdotool,
    Wmctrl,
}

impl Backend {
    /// `None` для "auto" и неизвестных имён
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "qtile" => Some(Backend::Qtile),
            "sway" => Some(Backend::Sway),
            "i3" => Some(Backend::I3),
            "xdotool" => Some(Backend::Xdotool),
            "wmctrl" => Some(Backend::Wmctrl),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Qtile => "qtile",
            Backend::Sway => "sway",
            Backend::I3 => "i3",
            Backend::Xdotool => "xdotool",
            Backend::Wmctrl => "wmctrl",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Путь к сокету Qtile: `<cache>/qtile/qtilesocket.<display>`
pub fn qtile_socket_path<F>(env: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let cache_dir = env("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| env("HOME").map(|home| Path::new(&home).join(".cache")))
        .unwrap_or_else(|| PathBuf::from(".cache"));

    let display = env("WAYLAND_DISPLAY")
        .filter(|v| !v.is_empty())
        .or_else(|| env("DISPLAY").filter(|v| !v.is_empty()))
        .unwrap_or_else(|| ":0".to_string());

    cache_dir.join("qtile").join(format!("qtilesocket.{}", display))
}

/// Определяет оконный менеджер по окружению сессии
pub fn detect_backend<F>(env: F, qtile_socket: &Path) -> Result<Backend>
where
    F: Fn(&str) -> Option<String>,
{
    let is_set = |name: &str| env(name).map(|v| !v.is_empty()).unwrap_or(false);

    let backend = if qtile_socket.exists() {
        debug!("Найден сокет Qtile: {:?}", qtile_socket);
        Backend::Qtile
    } else if is_set("SWAYSOCK") {
        Backend::Sway
    } else if is_set("I3SOCK") {
        Backend::I3
    } else if env("XDG_SESSION_TYPE").as_deref() == Some("x11") || is_set("DISPLAY") {
        Backend::Xdotool
    } else {
        return Err(FocusError::ServiceUnavailable(
            "не удалось определить оконный менеджер".to_string(),
        ));
    };

    info!("Обнаружен оконный менеджер: {}", backend);
    Ok(backend)
}
