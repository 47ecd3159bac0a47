use crate::error::{FocusError, Result};
use std::fmt;

use super::WindowId;

/// Результат работы селектора: выбранное окно или ничего
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected(WindowId),
    Nothing,
}

impl Selection {
    /// Разбирает stdout селектора.
    ///
    /// Пробельные символы по краям (в том числе завершающий перевод строки)
    /// отбрасываются. Пустой после этого вывод означает, что выбор не сделан.
    pub fn from_output(stdout: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(stdout);
        let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());

        if trimmed.is_empty() {
            return Ok(Selection::Nothing);
        }

        trimmed
            .parse::<WindowId>()
            .map(Selection::Selected)
            .map_err(|source| FocusError::Parse {
                output: trimmed.to_string(),
                source,
            })
    }

    #[allow(dead_code)]
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Selection::Selected(id) => Some(*id),
            Selection::Nothing => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Selected(id) => write!(f, "окно {}", id),
            Selection::Nothing => write!(f, "ничего не выбрано"),
        }
    }
}
