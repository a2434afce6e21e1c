//! Reads the current source text out of the editor widget.

use crate::page::PageDom;

/// Extract the program text currently visible on the page.
///
/// The primary source is the editor widget behind `code_selector`, which
/// exposes its lines as a newline-joined text block. When that yields no
/// non-whitespace content, every text-input area on the page is concatenated
/// as a fallback, each value followed by a newline.
///
/// `None` means the editor has not finished loading yet. That is an expected
/// transient state, not a failure; the caller retries on its next tick.
pub fn extract_source(page: &dyn PageDom, code_selector: &str) -> Option<String> {
    if let Some(text) = page.query_text(code_selector) {
        if !text.trim().is_empty() {
            return Some(text);
        }
    }

    let mut combined = String::new();
    for value in page.text_area_values() {
        combined.push_str(&value);
        combined.push('\n');
    }
    if !combined.trim().is_empty() {
        return Some(combined);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{SnapshotPage, CODE_LINES_SELECTOR};

    #[test]
    fn test_prefers_rendered_lines() {
        let page = SnapshotPage::new()
            .rendered_text(CODE_LINES_SELECTOR, "int x = 5;")
            .text_area("ignored");
        assert_eq!(
            extract_source(&page, CODE_LINES_SELECTOR).as_deref(),
            Some("int x = 5;")
        );
    }

    #[test]
    fn test_falls_back_to_text_areas() {
        let page = SnapshotPage::new()
            .rendered_text(CODE_LINES_SELECTOR, "   \n  ")
            .text_area("a = 1")
            .text_area("b = 2");
        assert_eq!(
            extract_source(&page, CODE_LINES_SELECTOR).as_deref(),
            Some("a = 1\nb = 2\n")
        );
    }

    #[test]
    fn test_not_ready_when_everything_is_blank() {
        let page = SnapshotPage::new().text_area("   ");
        assert_eq!(extract_source(&page, CODE_LINES_SELECTOR), None);
    }

    #[test]
    fn test_not_ready_on_empty_page() {
        let page = SnapshotPage::new();
        assert_eq!(extract_source(&page, CODE_LINES_SELECTOR), None);
    }
}
