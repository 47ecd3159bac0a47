use crate::error::{FocusError, Result};
use crate::model::WindowId;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use super::r#trait::WindowManagerTrait;
use super::tool::{failure_text, run_tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwayFlavor {
    Sway,
    I3,
}

/// Фокусировка через `swaymsg` / `i3-msg`
pub struct SwayClient {
    flavor: SwayFlavor,
    program: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CommandReply {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SwayClient {
    pub fn new(flavor: SwayFlavor) -> Self {
        let program = match flavor {
            SwayFlavor::Sway => "swaymsg",
            SwayFlavor::I3 => "i3-msg",
        };
        Self::with_program(flavor, program)
    }

    pub fn with_program(flavor: SwayFlavor, program: impl Into<PathBuf>) -> Self {
        Self {
            flavor,
            program: program.into(),
        }
    }

    /// sway адресует окна по con_id, i3 по X11 id
    pub fn focus_command(&self, window: WindowId) -> String {
        match self.flavor {
            SwayFlavor::Sway => format!("[con_id={}] focus", window),
            SwayFlavor::I3 => format!("[id={}] focus", window),
        }
    }

    fn args(&self, window: WindowId) -> Vec<String> {
        let command = self.focus_command(window);
        match self.flavor {
            // -r: ответ в JSON даже при ошибке
            SwayFlavor::Sway => vec!["-r".to_string(), command],
            SwayFlavor::I3 => vec![command],
        }
    }
}

/// Разбирает JSON-ответ на команду: `[{"success": bool, "error": "..."}]`
pub fn parse_command_reply(stdout: &[u8]) -> Result<()> {
    let replies: Vec<CommandReply> = serde_json::from_slice(stdout)?;

    if let Some(failed) = replies.iter().find(|r| !r.success) {
        return Err(FocusError::Client(
            failed
                .error
                .clone()
                .unwrap_or_else(|| "команда не выполнена".to_string()),
        ));
    }

    Ok(())
}

#[async_trait::async_trait]
impl WindowManagerTrait for SwayClient {
    fn name(&self) -> &'static str {
        match self.flavor {
            SwayFlavor::Sway => "sway",
            SwayFlavor::I3 => "i3",
        }
    }

    async fn focus(&self, window: WindowId) -> Result<()> {
        let output = run_tool(&self.program, self.args(window)).await?;

        match parse_command_reply(&output.stdout) {
            Ok(()) if output.status.success() => {}
            Ok(()) => return Err(FocusError::Client(failure_text(&output))),
            Err(FocusError::Json(_)) => {
                return Err(FocusError::Client(format!(
                    "{} вернул неожиданный ответ: {}",
                    self.program.display(),
                    failure_text(&output)
                )))
            }
            Err(e) => return Err(e),
        }

        info!("{}: окно {} получило фокус", self.name(), window);
        Ok(())
    }
}
