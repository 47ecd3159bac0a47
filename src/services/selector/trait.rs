use crate::config::Config;
use crate::error::Result;
use crate::model::{Selection, WindowId};
use std::path::Path;

/// Trait for window selectors that can run in different modes
#[async_trait::async_trait]
pub trait SelectorTrait: Send + Sync {
    /// Run the selector once and return what the user picked
    async fn select(&self) -> Result<Selection>;
}

/// Factory function to create an appropriate selector based on the dry_run flag
pub fn create_selector(
    config: &Config,
    base_dir: &Path,
    dry_run: bool,
    dry_run_window: Option<WindowId>,
) -> Result<Box<dyn SelectorTrait>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunSelector::new(dry_run_window)))
    } else {
        Ok(Box::new(super::process::ProcessSelector::new(
            &config.selector,
            base_dir,
        )))
    }
}
