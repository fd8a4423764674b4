use crate::domain::model::{OptionList, Trigger};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A live selection control resolved from a selector.
pub trait SelectControl: Send + Sync {
    fn value(&self) -> String;
    fn set_content(&self, markup: &str);
    fn has_class(&self, class: &str) -> bool;
    fn trigger(&self, event: &str);
}

/// The host page. Bindings registered through `on` are plain data; the
/// host dispatches matching events back into the controller.
pub trait Dom: Send + Sync {
    fn select(&self, selector: &str) -> Option<Arc<dyn SelectControl>>;
    fn on(&self, selector: &str, event: &str, trigger: Trigger);
    fn toggle_class(&self, selector: &str, class: &str);
    fn set_value(&self, selector: &str, value: &str);
    fn alert(&self, message: &str);
    /// Returns false when the element already carries the marker.
    fn mark_attached(&self, element: &str, plugin: &str) -> bool;
}

#[async_trait]
pub trait OptionSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<OptionList>;
}
