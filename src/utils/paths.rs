use crate::error::{FocusError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Определяет базовый каталог для путей селектора.
///
/// Порядок: явное значение (CLI или конфигурация), каталог файла
/// конфигурации, каталог исполняемого файла.
pub fn resolve_base_dir(explicit: Option<&Path>, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        debug!("Базовый каталог задан явно: {:?}", dir);
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = config_path.and_then(parent_dir) {
        debug!("Базовый каталог взят из пути конфигурации: {:?}", dir);
        return Ok(dir);
    }

    // Пути по умолчанию рассчитаны на каталог config/ рядом с target/,
    // от каталога бинарника они обычно не сходятся
    let exe = std::env::current_exe()?;
    warn!(
        "Базовый каталог не задан, используется каталог исполняемого файла {:?}; задайте --base-dir или base_dir",
        exe
    );
    parent_dir(&exe).ok_or_else(|| {
        FocusError::Internal(format!("Не удалось определить каталог исполняемого файла {:?}", exe))
    })
}

/// Разрешает путь относительно базового каталога; абсолютные пути не меняются.
pub fn resolve_in(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn parent_dir(path: &Path) -> Option<PathBuf> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(PathBuf::from(".")),
        Some(parent) => Some(parent.to_path_buf()),
        None => None,
    }
}
