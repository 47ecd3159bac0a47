use crate::config::Config;
use crate::error::Result;
use crate::model::WindowId;
use std::time::Duration;

use super::detect::{detect_backend, qtile_socket_path, Backend};
use super::dry_run::DryRunWindowManager;
use super::qtile::QtileClient;
use super::sway::{SwayClient, SwayFlavor};
use super::wmctrl::WmctrlClient;
use super::xdotool::XdotoolClient;

/// Trait for window-manager clients able to focus a window by id
#[async_trait::async_trait]
pub trait WindowManagerTrait: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Ask the running window manager to focus `window`
    async fn focus(&self, window: WindowId) -> Result<()>;
}

/// Factory function to create the window-manager client chosen by config or detection
pub fn create_window_manager(config: &Config, dry_run: bool) -> Result<Box<dyn WindowManagerTrait>> {
    if dry_run {
        return Ok(Box::new(DryRunWindowManager::new()));
    }

    let wm = &config.window_manager;
    let backend = match Backend::from_name(&wm.backend) {
        Some(backend) => backend,
        None if wm.backend == "auto" => {
            let socket = wm
                .qtile_socket
                .clone()
                .unwrap_or_else(|| qtile_socket_path(|name| std::env::var(name).ok()));
            detect_backend(|name| std::env::var(name).ok(), &socket)?
        }
        None => {
            return Err(crate::focus_error!(internal, "Неизвестный оконный менеджер: {}", wm.backend))
        }
    };

    let client: Box<dyn WindowManagerTrait> = match backend {
        Backend::Qtile => Box::new(QtileClient::new(
            wm.qtile_socket.clone(),
            Duration::from_millis(wm.ipc_timeout_ms),
        )),
        Backend::Sway => Box::new(SwayClient::new(SwayFlavor::Sway)),
        Backend::I3 => Box::new(SwayClient::new(SwayFlavor::I3)),
        Backend::Xdotool => Box::new(XdotoolClient::new()),
        Backend::Wmctrl => Box::new(WmctrlClient::new()),
    };

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_backend_selected() {
        let mut config = Config::default();

        config.window_manager.backend = "wmctrl".to_string();
        assert_eq!(create_window_manager(&config, false).unwrap().name(), "wmctrl");

        config.window_manager.backend = "i3".to_string();
        assert_eq!(create_window_manager(&config, false).unwrap().name(), "i3");

        config.window_manager.backend = "qtile".to_string();
        assert_eq!(create_window_manager(&config, false).unwrap().name(), "qtile");
    }

    #[test]
    fn test_dry_run_overrides_backend() {
        let mut config = Config::default();
        config.window_manager.backend = "sway".to_string();
        assert_eq!(create_window_manager(&config, true).unwrap().name(), "dry-run");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let mut config = Config::default();
        config.window_manager.backend = "kwin".to_string();
        assert!(create_window_manager(&config, false).is_err());
    }
}
