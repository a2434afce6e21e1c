//! Polling driver.
//!
//! A page under load has no reliable "editor ready" event to hook, so the
//! driver polls: every tick it attempts extraction, and a watchdog deadline
//! force-stops the attempt after a fixed ceiling. First success runs the
//! full Detect -> Estimate -> Display cycle exactly once, then polling ends.
//! Timing out is silent - no result, no error.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::AnalyzerConfig;
use crate::estimate::{estimate, Complexity};
use crate::extract::extract_source;
use crate::language::{detect_language, Language};
use crate::overlay;
use crate::page::PageDom;

/// Outcome of one successful analysis cycle.
#[derive(Debug)]
pub struct Analysis {
    /// The extracted program text the estimate was computed from.
    pub source: String,
    pub language: Language,
    pub complexity: Complexity,
    /// Handle of the overlay expiry task. Awaiting it observes the badge
    /// being removed; aborting it pins the badge.
    pub overlay_timer: JoinHandle<()>,
}

/// Runs one analysis attempt against a page.
///
/// The driver owns both of its timers for the duration of [`run`]: the
/// repeating extraction tick and the absolute watchdog deadline. Both are
/// torn down when `run` returns, on success or timeout alike. Construct one
/// driver per attempt.
pub struct PollDriver {
    page: Arc<dyn PageDom>,
    config: AnalyzerConfig,
}

impl PollDriver {
    pub fn new(page: Arc<dyn PageDom>) -> Self {
        Self {
            page,
            config: AnalyzerConfig::default(),
        }
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Poll until the editor yields source text or the watchdog fires.
    ///
    /// Returns `Ok(Some(_))` after the single successful cycle, `Ok(None)`
    /// when the ceiling elapsed with nothing to analyze. Errors are limited
    /// to the page write surface rejecting the style rule or the badge.
    pub async fn run(&self) -> anyhow::Result<Option<Analysis>> {
        // Style rule goes in up front, once per page lifetime.
        overlay::ensure_style(&*self.page)?;

        let period = self.config.poll_interval();
        let mut ticker =
            tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        let deadline = tokio::time::sleep(self.config.timeout());
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    warn!(timeout_ms = self.config.timeout().as_millis() as u64,
                        "editor never became ready; giving up");
                    return Ok(None);
                }
                _ = ticker.tick() => {
                    let source =
                        match extract_source(&*self.page, self.config.selectors.code_lines()) {
                            Some(s) => s,
                            None => {
                                debug!("editor not ready, retrying next tick");
                                continue;
                            }
                        };
                    return Ok(Some(self.complete(source)?));
                }
            }
        }
    }

    /// The one-shot tail of a successful poll: detect, estimate, display,
    /// and arm the overlay expiry timer.
    fn complete(&self, source: String) -> anyhow::Result<Analysis> {
        let language =
            detect_language(&*self.page, self.config.selectors.language_select());
        let complexity = estimate(&source, language);
        info!(%language, %complexity, "analysis complete");

        overlay::show(&*self.page, complexity.description())?;

        let page = Arc::clone(&self.page);
        let ttl = self.config.overlay_ttl();
        let overlay_timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            page.remove_element(overlay::OVERLAY_ID);
        });

        Ok(Analysis {
            source,
            language,
            complexity,
            overlay_timer,
        })
    }
}
