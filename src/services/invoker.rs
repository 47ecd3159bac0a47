use crate::error::Result;
use crate::model::{FocusOutcome, Selection};
use crate::services::selector::SelectorTrait;
use crate::services::window_manager::WindowManagerTrait;
use tracing::{debug, info};

/// Запускает селектор и передаёт выбранное окно оконному менеджеру.
///
/// Одна линейная последовательность: без повторов и таймаутов, ошибки
/// любого шага возвращаются вызывающему как есть.
pub struct FocusInvoker {
    selector: Box<dyn SelectorTrait>,
    window_manager: Box<dyn WindowManagerTrait>,
}

impl FocusInvoker {
    pub fn new(selector: Box<dyn SelectorTrait>, window_manager: Box<dyn WindowManagerTrait>) -> Self {
        Self {
            selector,
            window_manager,
        }
    }

    pub async fn run(&self) -> Result<FocusOutcome> {
        let selection = self.selector.select().await?;

        let window = match selection {
            Selection::Selected(window) => window,
            Selection::Nothing => {
                info!("Окно не выбрано, фокус не меняется");
                return Ok(FocusOutcome::NothingSelected);
            }
        };

        debug!("Передаём окно {} клиенту {}", window, self.window_manager.name());
        self.window_manager.focus(window).await?;

        Ok(FocusOutcome::Focused {
            window,
            backend: self.window_manager.name(),
        })
    }
}
