//! Loop counting and nested-loop detection.
//!
//! Purely textual: the source is walked line by line, loop keywords are
//! matched as whole words, and nesting is inferred from a running
//! opened-minus-closed brace balance. A keyword inside a string literal or
//! comment still counts - there is no lexer here, by contract.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-word loop keywords.
    static ref LOOP_KEYWORD: Regex = Regex::new(r"\b(for|while)\b").unwrap();
}

/// Result of scanning a source text for loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopScan {
    /// Number of lines carrying a loop keyword.
    pub count: usize,
    /// Whether any loop has another loop keyword inside its brace block.
    pub nested: bool,
}

/// Count loops and detect nesting.
///
/// For each line holding a loop keyword, a forward scan maintains the brace
/// balance of that loop's block, seeded with the loop line's own net delta.
/// A later line holding a loop keyword while the balance is still >= 0 marks
/// the source as nested; a balance of exactly zero closes the block and ends
/// that loop's scan. A balance that never reaches zero simply runs off the
/// end of the text.
///
/// The remainder of the loop line itself is scanned first, so a block like
/// `for(..){ for(..){..} }` written on one line is still nested. The counter
/// increments once per line regardless of how many keywords the line holds.
pub fn scan_loops(source: &str) -> LoopScan {
    let mut scan = LoopScan::default();
    let lines: Vec<&str> = source.split(|c| c == '\n' || c == '\r').collect();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if !LOOP_KEYWORD.is_match(line) {
            continue;
        }
        scan.count += 1;

        if nested_on_same_line(line) {
            scan.nested = true;
            continue;
        }

        let mut balance = brace_delta(line);
        for inner in &lines[i + 1..] {
            if balance < 0 {
                break;
            }
            balance += brace_delta(inner);
            if LOOP_KEYWORD.is_match(inner) {
                scan.nested = true;
                break;
            }
            if balance == 0 {
                break;
            }
        }
    }

    scan
}

/// A second loop keyword later in the same line, with the braces between the
/// two not yet closed, counts as nesting.
fn nested_on_same_line(line: &str) -> bool {
    let first = match LOOP_KEYWORD.find(line) {
        Some(m) => m,
        None => return false,
    };
    let rest = &line[first.end()..];
    match LOOP_KEYWORD.find(rest) {
        Some(second) => brace_delta(&rest[..second.start()]) >= 0,
        None => false,
    }
}

/// Net opened-minus-closed braces on a piece of text.
fn brace_delta(text: &str) -> i64 {
    text.matches('{').count() as i64 - text.matches('}').count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_loops() {
        let scan = scan_loops("int x = 5;\nreturn x;");
        assert_eq!(scan, LoopScan { count: 0, nested: false });
    }

    #[test]
    fn test_single_loop() {
        let scan = scan_loops("for (int i = 0; i < n; i++) { sum += i; }");
        assert_eq!(scan, LoopScan { count: 1, nested: false });
    }

    #[test]
    fn test_nested_across_lines() {
        let src = "for (int i = 0; i < n; i++) {\n    while (j < n) {\n        j++;\n    }\n}";
        let scan = scan_loops(src);
        assert!(scan.nested);
        assert_eq!(scan.count, 2);
    }

    #[test]
    fn test_nested_on_one_line() {
        let scan = scan_loops("for(i=0;i<n;i++){ for(j=0;j<n;j++){ x++; } }");
        assert!(scan.nested);
        assert_eq!(scan.count, 1);
    }

    #[test]
    fn test_sequential_loops_not_nested() {
        let src = "for (int i = 0; i < n; i++) {\n    a += i;\n}\nfor (int j = 0; j < n; j++) {\n    b += j;\n}";
        let scan = scan_loops(src);
        assert_eq!(scan.count, 2);
        assert!(!scan.nested);
    }

    #[test]
    fn test_unclosed_block_is_not_nested() {
        // The balance never reaches zero; the scan just runs off the end.
        let scan = scan_loops("while (true) {\n    x += 1;\n");
        assert_eq!(scan, LoopScan { count: 1, nested: false });
    }

    #[test]
    fn test_keyword_in_string_still_counts() {
        // No tokenization: textual matching is the contract.
        let scan = scan_loops(r#"let s = "wait for it";"#);
        assert_eq!(scan.count, 1);
    }

    #[test]
    fn test_keyword_as_identifier_substring_does_not_count() {
        let scan = scan_loops("int formula = therefore + 1;");
        assert_eq!(scan.count, 0);
    }

    #[test]
    fn test_python_loops_without_braces() {
        // Brace-free blocks never close the balance, so a later loop line
        // still registers as nesting.
        let src = "for i in range(n):\n    for j in range(n):\n        x += 1";
        let scan = scan_loops(src);
        assert!(scan.nested);
    }
}
