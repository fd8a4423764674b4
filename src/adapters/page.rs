use crate::domain::model::Trigger;
use crate::domain::ports::{Dom, SelectControl};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the host page. Every mutation the controller
/// performs is recorded so the demo binary and the tests can observe it:
/// select contents, registered bindings, class toggles, input values,
/// alerts and attach markers.
#[derive(Clone, Default)]
pub struct InMemoryPage {
    state: Arc<Mutex<PageState>>,
}

#[derive(Default)]
struct PageState {
    selects: HashMap<String, Arc<InMemorySelect>>,
    bindings: HashMap<(String, String), Trigger>,
    toggled: HashMap<String, Vec<String>>,
    inputs: HashMap<String, String>,
    alerts: Vec<String>,
    attached: HashSet<String>,
}

impl InMemoryPage {
    pub fn add_select(&self, selector: &str) -> Arc<InMemorySelect> {
        let select = Arc::new(InMemorySelect::new(selector));
        self.state
            .lock()
            .unwrap()
            .selects
            .insert(selector.to_string(), select.clone());
        select
    }

    pub fn select_handle(&self, selector: &str) -> Option<Arc<InMemorySelect>> {
        self.state.lock().unwrap().selects.get(selector).cloned()
    }

    pub fn binding(&self, selector: &str, event: &str) -> Option<Trigger> {
        self.state
            .lock()
            .unwrap()
            .bindings
            .get(&(selector.to_string(), event.to_string()))
            .copied()
    }

    pub fn bindings_len(&self) -> usize {
        self.state.lock().unwrap().bindings.len()
    }

    /// How many times a class was toggled on `selector`.
    pub fn toggle_count(&self, selector: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .toggled
            .get(selector)
            .map(|classes| classes.len())
            .unwrap_or(0)
    }

    /// Whether an odd number of "hidden" toggles left `selector` hidden.
    pub fn is_hidden(&self, selector: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .toggled
            .get(selector)
            .map(|classes| classes.iter().filter(|c| *c == "hidden").count() % 2 == 1)
            .unwrap_or(false)
    }

    pub fn input(&self, selector: &str) -> Option<String> {
        self.state.lock().unwrap().inputs.get(selector).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().unwrap().alerts.clone()
    }
}

impl Dom for InMemoryPage {
    fn select(&self, selector: &str) -> Option<Arc<dyn SelectControl>> {
        self.select_handle(selector)
            .map(|select| select as Arc<dyn SelectControl>)
    }

    fn on(&self, selector: &str, event: &str, trigger: Trigger) {
        self.state
            .lock()
            .unwrap()
            .bindings
            .insert((selector.to_string(), event.to_string()), trigger);
    }

    fn toggle_class(&self, selector: &str, class: &str) {
        self.state
            .lock()
            .unwrap()
            .toggled
            .entry(selector.to_string())
            .or_default()
            .push(class.to_string());
    }

    fn set_value(&self, selector: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .inputs
            .insert(selector.to_string(), value.to_string());
    }

    fn alert(&self, message: &str) {
        self.state.lock().unwrap().alerts.push(message.to_string());
    }

    fn mark_attached(&self, element: &str, plugin: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .attached
            .insert(format!("{}::{}", plugin, element))
    }
}

/// A recorded select control: current value, rendered option markup,
/// classes and programmatically triggered events.
pub struct InMemorySelect {
    selector: String,
    value: Mutex<String>,
    content: Mutex<String>,
    classes: Mutex<HashSet<String>>,
    events: Mutex<Vec<String>>,
}

impl InMemorySelect {
    fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            value: Mutex::new(String::new()),
            content: Mutex::new(String::new()),
            classes: Mutex::new(HashSet::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Host-side selection, as if the user picked an option.
    pub fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }

    pub fn content(&self) -> String {
        self.content.lock().unwrap().clone()
    }

    pub fn add_class(&self, class: &str) {
        self.classes.lock().unwrap().insert(class.to_string());
    }

    pub fn triggered_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SelectControl for InMemorySelect {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_content(&self, markup: &str) {
        *self.content.lock().unwrap() = markup.to_string();
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.lock().unwrap().contains(class)
    }

    fn trigger(&self, event: &str) {
        self.events.lock().unwrap().push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Level;

    #[test]
    fn test_select_resolution() {
        let page = InMemoryPage::default();
        page.add_select("#PaisId");

        assert!(page.select("#PaisId").is_some());
        assert!(page.select("#Missing").is_none());
    }

    #[test]
    fn test_mark_attached_once_per_element() {
        let page = InMemoryPage::default();
        assert!(page.mark_attached("#GeoForm", "GeoChange"));
        assert!(!page.mark_attached("#GeoForm", "GeoChange"));
        assert!(page.mark_attached("#OtherForm", "GeoChange"));
    }

    #[test]
    fn test_hidden_state_follows_toggle_parity() {
        let page = InMemoryPage::default();
        assert!(!page.is_hidden(".input_new-Pais"));
        page.toggle_class(".input_new-Pais", "hidden");
        assert!(page.is_hidden(".input_new-Pais"));
        page.toggle_class(".input_new-Pais", "hidden");
        assert!(!page.is_hidden(".input_new-Pais"));
    }

    #[test]
    fn test_bindings_are_data() {
        let page = InMemoryPage::default();
        page.on("#PaisId", "change", Trigger::Change(Level::Pais));

        assert_eq!(
            page.binding("#PaisId", "change"),
            Some(Trigger::Change(Level::Pais))
        );
        assert_eq!(page.binding("#PaisId", "click"), None);
        assert_eq!(page.bindings_len(), 1);
    }
}
