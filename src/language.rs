//! Guesses which language the extracted source is written in.

use serde::{Deserialize, Serialize};

use crate::page::PageDom;

/// The languages the estimator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Python,
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::Java => "java",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Cpp
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" => Ok(Language::Cpp),
            "python" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            _ => Err(format!("unknown language: {}", s)),
        }
    }
}

/// Read the language dropdown and map its value to a [`Language`].
///
/// A missing control defaults to `Cpp`. Matching is by substring on the
/// lowercased value, python before java so a python variant can never lose
/// to a stray "java" elsewhere in the value. "javascript" also lands on the
/// "java" substring - inherited behavior, kept as-is.
pub fn detect_language(page: &dyn PageDom, selector: &str) -> Language {
    let value = match page.select_value(selector) {
        Some(v) => v.to_lowercase(),
        None => return Language::Cpp,
    };
    if value.contains("python") {
        return Language::Python;
    }
    if value.contains("java") {
        return Language::Java;
    }
    Language::Cpp
}
