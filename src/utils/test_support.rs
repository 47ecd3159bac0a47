//! Helpers for tests that run throwaway shell scripts.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Запись скрипта и его запуск под одной блокировкой: иначе параллельный
/// fork другого теста может удерживать дескриптор файла и exec вернёт ETXTBSY.
pub static SCRIPT_LOCK: Mutex<()> = Mutex::const_new(());

/// Создаёт исполняемый `/bin/sh` скрипт `name` в `dir`
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
