use crate::config::SelectorConfig;
use crate::error::{FocusError, Result};
use crate::model::Selection;
use crate::utils::paths::resolve_in;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use super::r#trait::SelectorTrait;

/// Полная командная строка селектора
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl SelectorCommand {
    /// `<base>/<binary> <subcommand> <base>/<style> <base>/<bindings>`
    pub fn build(config: &SelectorConfig, base_dir: &Path) -> Self {
        Self {
            program: resolve_in(base_dir, &config.binary),
            args: vec![
                OsString::from(&config.subcommand),
                resolve_in(base_dir, &config.style_file).into_os_string(),
                resolve_in(base_dir, &config.bindings_file).into_os_string(),
            ],
        }
    }
}

pub struct ProcessSelector {
    command: SelectorCommand,
}

impl ProcessSelector {
    pub fn new(config: &SelectorConfig, base_dir: &Path) -> Self {
        Self {
            command: SelectorCommand::build(config, base_dir),
        }
    }

    #[allow(dead_code)]
    pub fn command(&self) -> &SelectorCommand {
        &self.command
    }

    async fn run_process(&self) -> Result<Vec<u8>> {
        let SelectorCommand { program, args } = &self.command;
        debug!("Запуск селектора: {:?} {:?}", program, args);

        // stderr и stdin остаются у вызывающего, захватывается только stdout
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    FocusError::ProcessExecution(format!("селектор не найден: {:?}", program))
                }
                ErrorKind::PermissionDenied => FocusError::ProcessExecution(format!(
                    "селектор не является исполняемым: {:?}",
                    program
                )),
                _ => FocusError::ProcessExecution(format!(
                    "не удалось запустить {:?}: {}",
                    program, e
                )),
            })?;

        if !output.status.success() {
            return Err(FocusError::ProcessExecution(format!(
                "{:?} завершился с ошибкой: {}",
                program, output.status
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait::async_trait]
impl SelectorTrait for ProcessSelector {
    async fn select(&self) -> Result<Selection> {
        let stdout = self.run_process().await?;
        debug!("Селектор вывел {} байт", stdout.len());

        let selection = Selection::from_output(&stdout)?;
        info!("Результат селектора: {}", selection);
        Ok(selection)
    }
}
