use crate::error::Result;
use crate::model::{Selection, WindowId};
use tracing::info;

use super::r#trait::SelectorTrait;

pub struct DryRunSelector {
    window: Option<WindowId>,
}

impl DryRunSelector {
    pub fn new(window: Option<WindowId>) -> Self {
        Self { window }
    }
}

#[async_trait::async_trait]
impl SelectorTrait for DryRunSelector {
    async fn select(&self) -> Result<Selection> {
        let selection = match self.window {
            Some(id) => Selection::Selected(id),
            None => Selection::Nothing,
        };
        info!("Dry-run: селектор не запускается, эмулируем выбор: {}", selection);
        Ok(selection)
    }
}
