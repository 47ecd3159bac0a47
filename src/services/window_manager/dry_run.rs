use crate::error::Result;
use crate::model::WindowId;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

use super::r#trait::WindowManagerTrait;

/// Ничего не фокусирует, только записывает запросы
#[derive(Default)]
pub struct DryRunWindowManager {
    focused: Arc<Mutex<Vec<WindowId>>>,
}

impl DryRunWindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Общий журнал запросов, доступный после передачи клиента в invoker
    #[allow(dead_code)]
    pub fn journal(&self) -> Arc<Mutex<Vec<WindowId>>> {
        self.focused.clone()
    }
}

#[async_trait::async_trait]
impl WindowManagerTrait for DryRunWindowManager {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    async fn focus(&self, window: WindowId) -> Result<()> {
        info!("Dry-run: эмулируем фокус окна {}", window);
        self.focused.lock().push(window);
        Ok(())
    }
}
