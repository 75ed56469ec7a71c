use anyhow::Result;
use tm_core::Config as CoreConfig;

#[derive(Debug, Clone)]
pub struct Config {
  pub core: CoreConfig,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let core = CoreConfig::from_env()?;
    Ok(Self { core })
  }

  /// Apply command-line path overrides on top of the environment config
  pub fn with_overrides(
    mut self,
    tweets: Option<String>,
    tickers: Option<String>,
    lexicon: Option<String>,
  ) -> Self {
    if let Some(path) = tweets {
      self.core.tweets_csv_path = path;
    }
    if let Some(path) = tickers {
      self.core.tickers_csv_path = path;
    }
    if let Some(path) = lexicon {
      self.core.lexicon_csv_path = path;
    }
    self
  }
}
