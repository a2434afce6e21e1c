//! Recursion detection.
//!
//! A single lexical pass per language: find something that looks like a
//! function definition, then look for a call to the same name anywhere in
//! the remaining text. Lookahead is unbounded, so an unrelated later call to
//! a same-named function matches too, and mutual recursion is missed. Both
//! are accepted limits of the heuristic.

use once_cell::sync::Lazy;
use phf::phf_set;
use regex::Regex;

use crate::language::Language;

/// Python definition head: `def name(...):` on one line.
static PY_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)\s*\(.*\):").unwrap());

/// C/Java-style definition: `name(...) {` with no `)` inside the parameter
/// list. Control-flow headers match this shape too and are filtered below.
static C_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\(([^)]*)\)\s*\{").unwrap());

/// Keywords whose parenthesized headers are not function definitions. A
/// loop header taken as a "function" would see the next loop keyword as a
/// call to itself and turn every nested loop into recursion.
static CONTROL_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "for", "while", "if", "switch", "catch",
};

/// Whether the source appears to define a function that later calls itself.
pub fn detect_recursion(source: &str, language: Language) -> bool {
    match language {
        Language::Python => python_recursion(source),
        Language::Cpp | Language::Java => c_style_recursion(source),
    }
}

fn python_recursion(source: &str) -> bool {
    for caps in PY_DEF.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        if calls_name(&source[whole.end()..], name) {
            return true;
        }
    }
    false
}

fn c_style_recursion(source: &str) -> bool {
    for caps in C_SIGNATURE.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        if CONTROL_KEYWORDS.contains(name) {
            continue;
        }
        if calls_name(&source[whole.end()..], name) {
            return true;
        }
    }
    false
}

/// Whether `text` contains a call-shaped mention of `name`.
fn calls_name(text: &str, name: &str) -> bool {
    let pattern = format!(r"\b{}\s*\(", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_direct_recursion() {
        let src = "def f(n):\n    if n == 0: return 1\n    return f(n - 1)";
        assert!(detect_recursion(src, Language::Python));
    }

    #[test]
    fn test_python_no_recursion() {
        let src = "def f(n):\n    return n + 1\n\nprint(g(3))";
        assert!(!detect_recursion(src, Language::Python));
    }

    #[test]
    fn test_python_call_before_def_does_not_count() {
        // Only calls after the definition head are considered.
        let src = "f(3)\ndef f(n):\n    return 1";
        assert!(!detect_recursion(src, Language::Python));
    }

    #[test]
    fn test_c_style_direct_recursion() {
        let src = "int fact(int n) {\n    if (n == 0) return 1;\n    return n * fact(n - 1);\n}";
        assert!(detect_recursion(src, Language::Cpp));
        assert!(detect_recursion(src, Language::Java));
    }

    #[test]
    fn test_loop_header_is_not_a_definition() {
        let src = "for(i=0;i<n;i++){ for(j=0;j<n;j++){ x++; } }";
        assert!(!detect_recursion(src, Language::Cpp));
    }

    #[test]
    fn test_c_style_no_recursion() {
        let src = "int add(int a, int b) {\n    return a + b;\n}";
        assert!(!detect_recursion(src, Language::Cpp));
    }

    #[test]
    fn test_unrelated_later_call_false_positives() {
        // Unbounded lookahead: a same-named call in another function still
        // matches. Known heuristic limit, preserved on purpose.
        let src = "int work(int n) {\n    return n;\n}\nint main() {\n    return work(3);\n}";
        assert!(detect_recursion(src, Language::Cpp));
    }

    #[test]
    fn test_python_pattern_ignored_for_c_languages() {
        let src = "def f(n):\n    return f(n - 1)";
        assert!(!detect_recursion(src, Language::Cpp));
    }
}
