//! Page capability interface.
//!
//! The analyzer never touches a browser directly. Everything it needs from
//! the page - reading the editor widget, reading the language dropdown,
//! inserting and removing the badge - goes through the [`PageDom`] trait, so
//! the whole pipeline runs against an in-memory [`SnapshotPage`] in tests
//! and against a real DOM binding in an embedding host.

mod snapshot;

pub use snapshot::SnapshotPage;

use thiserror::Error;

/// Selector for the editor widget that renders code as line elements.
pub const CODE_LINES_SELECTOR: &str = ".view-lines";

/// Selector for the language dropdown control.
pub const LANGUAGE_SELECT_SELECTOR: &str =
    r#"select[data-e2e-locator="code-language-select"]"#;

/// Errors from the page write surface.
///
/// Reads never fail - a missing element is an expected state and comes back
/// as `None` or an empty list. Writes can fail when the handle no longer
/// points at a live document.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("page handle is detached from its document")]
    Detached,
}

/// An element to insert into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. "div" or "style".
    pub tag: String,
    /// The element id. Inserting an element never replaces an existing one;
    /// callers that want at-most-one semantics remove the id first.
    pub id: String,
    /// Optional class attribute.
    pub class: Option<String>,
    /// Text content. For a "style" element this is the rule text.
    pub text: String,
}

impl Element {
    /// Create an element with no class.
    pub fn new(tag: &str, id: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: id.to_string(),
            class: None,
            text: text.to_string(),
        }
    }

    /// Set the class attribute.
    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }
}

/// Read and write access to the page, as capabilities.
///
/// Implementations must be shareable across tasks: the overlay expiry timer
/// holds a clone of the page handle after the polling loop has returned.
pub trait PageDom: Send + Sync {
    /// Text content of the first element matching `selector`, lines joined
    /// with newlines as the widget renders them. `None` when nothing
    /// matches.
    fn query_text(&self, selector: &str) -> Option<String>;

    /// Values of every text-input area on the page, in document order.
    fn text_area_values(&self) -> Vec<String>;

    /// Selected value of the select control matching `selector`.
    fn select_value(&self, selector: &str) -> Option<String>;

    /// Insert an element into the page.
    fn insert_element(&self, element: Element) -> Result<(), PageError>;

    /// Remove the element with the given id. Returns whether one existed.
    fn remove_element(&self, id: &str) -> bool;

    /// Whether an element with the given id is present.
    fn has_element(&self, id: &str) -> bool;
}
