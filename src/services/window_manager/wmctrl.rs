use crate::error::{FocusError, Result};
use crate::model::WindowId;
use std::path::PathBuf;
use tracing::info;

use super::r#trait::WindowManagerTrait;
use super::tool::{failure_text, run_tool};

pub struct WmctrlClient {
    program: PathBuf,
}

impl WmctrlClient {
    pub fn new() -> Self {
        Self::with_program("wmctrl")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait::async_trait]
impl WindowManagerTrait for WmctrlClient {
    fn name(&self) -> &'static str {
        "wmctrl"
    }

    async fn focus(&self, window: WindowId) -> Result<()> {
        let args = ["-i".to_string(), "-a".to_string(), window.to_x11_hex()];
        let output = run_tool(&self.program, args).await?;

        if !output.status.success() {
            return Err(FocusError::Client(format!(
                "wmctrl не нашёл окно {}: {}",
                window.to_x11_hex(),
                failure_text(&output)
            )));
        }

        info!("wmctrl: окно {} получило фокус", window);
        Ok(())
    }
}
