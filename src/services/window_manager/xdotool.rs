use crate::error::{FocusError, Result};
use crate::model::WindowId;
use std::path::PathBuf;
use tracing::{debug, info};

use super::r#trait::WindowManagerTrait;
use super::tool::{failure_text, run_tool};

pub struct XdotoolClient {
    program: PathBuf,
}

impl XdotoolClient {
    pub fn new() -> Self {
        Self::with_program("xdotool")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait::async_trait]
impl WindowManagerTrait for XdotoolClient {
    fn name(&self) -> &'static str {
        "xdotool"
    }

    async fn focus(&self, window: WindowId) -> Result<()> {
        debug!("Активация окна {} через xdotool", window);
        let output = run_tool(&self.program, ["windowactivate".to_string(), window.to_string()]).await?;

        if !output.status.success() {
            return Err(FocusError::Client(format!(
                "xdotool не смог активировать окно {}: {}",
                window,
                failure_text(&output)
            )));
        }

        info!("xdotool: окно {} получило фокус", window);
        Ok(())
    }
}
