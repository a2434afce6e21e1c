//! Rendering of a finished analysis.
//!
//! The overlay is what the page visitor sees; these renderers are for the
//! embedding host. JSON for logs and pipelines, a colored line for
//! terminals. Both return strings - a library does not print.

use colored::*;
use serde::{Deserialize, Serialize};

use crate::driver::Analysis;

/// Stable JSON shape of an analysis result.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub language: String,
    pub complexity: String,
    pub description: String,
}

impl JsonReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            language: analysis.language.as_str().to_string(),
            complexity: analysis.complexity.as_str().to_string(),
            description: analysis.complexity.description().to_string(),
        }
    }
}

/// Render an analysis as pretty-printed JSON.
pub fn to_json(analysis: &Analysis) -> anyhow::Result<String> {
    let report = JsonReport::from_analysis(analysis);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render an analysis as a colored one-line summary.
pub fn render_pretty(analysis: &Analysis) -> String {
    format!(
        "{} {}  {}",
        "⏱ Time Complexity:".cyan().bold(),
        analysis.complexity.description(),
        format!("[{}]", analysis.language).dimmed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::Complexity;
    use crate::language::Language;

    fn make_analysis(language: Language, complexity: Complexity) -> Analysis {
        Analysis {
            source: "int x = 5;".to_string(),
            language,
            complexity,
            overlay_timer: tokio::spawn(async {}),
        }
    }

    #[tokio::test]
    async fn test_json_report_shape() {
        let analysis = make_analysis(Language::Python, Complexity::Recursive);
        let json = to_json(&analysis).unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed.language, "python");
        assert_eq!(parsed.complexity, "recursive");
        assert_eq!(parsed.description, "Likely O(2^n) or O(n) (recursive)");
    }

    #[tokio::test]
    async fn test_pretty_contains_description_and_language() {
        colored::control::set_override(false);
        let analysis = make_analysis(Language::Cpp, Complexity::Quadratic);
        let line = render_pretty(&analysis);
        assert!(line.contains("O(n²) (nested loops)"));
        assert!(line.contains("[cpp]"));
    }
}
