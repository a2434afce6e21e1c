//! Bigolens - heuristic time-complexity overlay for in-page code editors.
//!
//! Bigolens pulls the program text out of an editor widget rendered on a
//! page, guesses its language from a dropdown control, classifies the code
//! into a coarse asymptotic-complexity bucket with lexical pattern matching,
//! and shows the result as a transient badge on the same page.
//!
//! The classifier is a best-effort heuristic by contract: it counts loop
//! keywords and scans for recursion textually, so a `for` inside a string
//! literal counts as a loop and mutual recursion goes unnoticed. Upgrading
//! it to a real parser would change observable behavior and is out of scope.
//!
//! # Architecture
//!
//! - `page`: the injected page capability trait plus an in-memory snapshot
//!   implementation, so every stage runs without a live browser
//! - `extract`: reads the current source text out of the editor widget
//! - `language`: sniffs the language dropdown
//! - `estimate`: the complexity classifier (recursion, nesting, loop count)
//! - `overlay`: the result badge and its one-shot style rule
//! - `driver`: polling loop with a watchdog ceiling and overlay expiry
//! - `config`: selector and timing overrides, YAML-loadable
//! - `report`: JSON and pretty rendering of a finished analysis

pub mod config;
pub mod driver;
pub mod estimate;
pub mod extract;
pub mod language;
pub mod overlay;
pub mod page;
pub mod report;

pub use config::AnalyzerConfig;
pub use driver::{Analysis, PollDriver};
pub use estimate::{estimate, Complexity};
pub use extract::extract_source;
pub use language::{detect_language, Language};
pub use overlay::{OVERLAY_ID, STYLE_ID};
pub use page::{Element, PageDom, PageError, SnapshotPage};
pub use report::JsonReport;
