use crate::error::{FocusError, Result};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Запускает утилиту оконного менеджера и захватывает её вывод
pub async fn run_tool<I, S>(program: &Path, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args);
    debug!("Запуск: {:?}", cmd);

    cmd.output().await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            FocusError::ServiceUnavailable(format!("{} не найден", program.display()))
        }
        _ => FocusError::Io(e),
    })
}

/// Текст stderr без завершающих пробелов, либо статус, если stderr пуст
pub fn failure_text(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr
    }
}
