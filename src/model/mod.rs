pub mod selection;
pub mod window;

pub use selection::Selection;
pub use window::WindowId;

/// Итог одного запуска
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusOutcome {
    Focused { window: WindowId, backend: &'static str },
    NothingSelected,
}
