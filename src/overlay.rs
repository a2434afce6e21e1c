//! The result badge and its style rule.
//!
//! Presentation only. The overlay is a fixed-position badge holding the
//! estimate's description; showing it replaces any previous badge, so at
//! most one exists at any time. The style rule is injected once per page
//! lifetime and never removed. Expiry scheduling belongs to the driver.

use crate::page::{Element, PageDom, PageError};

/// Id of the overlay badge element.
pub const OVERLAY_ID: &str = "lc-complexity-box";

/// Id of the injected style element.
pub const STYLE_ID: &str = "lc-complexity-style";

/// Class carried by the badge, referenced by the style rule.
const OVERLAY_CLASS: &str = "complexity-box";

/// Fixed badge styling.
const OVERLAY_CSS: &str = ".complexity-box{position:fixed;top:20px;right:20px;\
background:#333;color:#fff;padding:10px 15px;border-radius:8px;font-size:14px;\
font-family:sans-serif;z-index:9999;box-shadow:0 2px 6px rgba(0,0,0,.3);}";

/// Inject the badge style rule if the page does not carry it yet.
pub fn ensure_style(page: &dyn PageDom) -> Result<(), PageError> {
    if page.has_element(STYLE_ID) {
        return Ok(());
    }
    page.insert_element(Element::new("style", STYLE_ID, OVERLAY_CSS))
}

/// Show the badge with the given description.
///
/// Removes any existing badge first, so repeated calls leave exactly one.
pub fn show(page: &dyn PageDom, description: &str) -> Result<(), PageError> {
    page.remove_element(OVERLAY_ID);
    page.insert_element(
        Element::new("div", OVERLAY_ID, &format!("⏱ Time Complexity: {}", description))
            .with_class(OVERLAY_CLASS),
    )
}

/// Remove the badge. Returns whether one was present.
pub fn clear(page: &dyn PageDom) -> bool {
    page.remove_element(OVERLAY_ID)
}
