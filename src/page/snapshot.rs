//! In-memory page implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{Element, PageDom, PageError};

#[derive(Default)]
struct PageState {
    /// Rendered text by selector, as the editor widget would expose it.
    rendered: HashMap<String, String>,
    /// Values of the text-input areas, in document order.
    text_areas: Vec<String>,
    /// Selected value by select-control selector.
    selected: HashMap<String, String>,
    /// Elements inserted through the write surface, in insertion order.
    inserted: Vec<Element>,
    /// When set, writes fail as if the document went away.
    detached: bool,
}

/// A page held entirely in memory.
///
/// Serves two purposes: unit and integration tests run the full pipeline
/// against it, and embedders that capture page state out-of-process can feed
/// a snapshot through the same code path as a live binding.
///
/// Construction is builder-style; the `set_*` methods mutate through a
/// shared handle, which is how tests simulate an editor that finishes
/// loading only after a few polls.
#[derive(Default)]
pub struct SnapshotPage {
    state: Mutex<PageState>,
}

impl SnapshotPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the rendered text behind a selector.
    pub fn rendered_text(self, selector: &str, text: &str) -> Self {
        self.set_rendered_text(selector, text);
        self
    }

    /// Builder: append a text-input area with the given value.
    pub fn text_area(self, value: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .text_areas
            .push(value.to_string());
        self
    }

    /// Builder: set the selected value of a select control.
    pub fn selected(self, selector: &str, value: &str) -> Self {
        self.set_selected(selector, value);
        self
    }

    /// Set or replace the rendered text behind a selector.
    pub fn set_rendered_text(&self, selector: &str, text: &str) {
        self.state
            .lock()
            .unwrap()
            .rendered
            .insert(selector.to_string(), text.to_string());
    }

    /// Set or replace the selected value of a select control.
    pub fn set_selected(&self, selector: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .selected
            .insert(selector.to_string(), value.to_string());
    }

    /// Detach the page: subsequent inserts fail with [`PageError::Detached`].
    pub fn detach(&self) {
        self.state.lock().unwrap().detached = true;
    }

    /// Number of inserted elements carrying the given id.
    pub fn element_count(&self, id: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .inserted
            .iter()
            .filter(|e| e.id == id)
            .count()
    }

    /// Snapshot of the currently inserted elements, in insertion order.
    pub fn elements(&self) -> Vec<Element> {
        self.state.lock().unwrap().inserted.clone()
    }
}

impl PageDom for SnapshotPage {
    fn query_text(&self, selector: &str) -> Option<String> {
        self.state.lock().unwrap().rendered.get(selector).cloned()
    }

    fn text_area_values(&self) -> Vec<String> {
        self.state.lock().unwrap().text_areas.clone()
    }

    fn select_value(&self, selector: &str) -> Option<String> {
        self.state.lock().unwrap().selected.get(selector).cloned()
    }

    fn insert_element(&self, element: Element) -> Result<(), PageError> {
        let mut state = self.state.lock().unwrap();
        if state.detached {
            return Err(PageError::Detached);
        }
        state.inserted.push(element);
        Ok(())
    }

    fn remove_element(&self, id: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        let before = state.inserted.len();
        state.inserted.retain(|e| e.id != id);
        state.inserted.len() != before
    }

    fn has_element(&self, id: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .inserted
            .iter()
            .any(|e| e.id == id)
    }
}
