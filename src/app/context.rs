use crate::app::error::Result;
use crate::classifier::Classifier;
use crate::config::Config;

pub struct AppContext {
    pub config: Config,
    pub classifier: Classifier,
}

impl AppContext {
    /// Build a context from the user's config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(Config::load()?))
    }

    pub fn with_config(config: Config) -> Self {
        let classifier = Classifier::new(config.classifier);
        Self { config, classifier }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}
