pub mod gemini;
pub mod browser_ai;

use std::rc::Rc;
use lingo_core::ports::EnrichmentPort;
use lingo_types::config::{EnrichmentConfig, EnrichmentProvider};

pub use browser_ai::BrowserAiProvider;
pub use gemini::GeminiProvider;

/// Build the enrichment provider the config asks for.
/// Custom providers speak the Gemini protocol against their own base URL.
pub fn build_provider(config: &EnrichmentConfig) -> Rc<dyn EnrichmentPort> {
    match config.provider {
        EnrichmentProvider::BrowserAi => Rc::new(BrowserAiProvider::new()),
        EnrichmentProvider::Gemini | EnrichmentProvider::Custom => {
            Rc::new(GeminiProvider::new(config.clone()))
        }
    }
}
