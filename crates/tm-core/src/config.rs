//! Configuration management for the ticker-mentions pipeline

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the analytics pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Path to the tweet CSV file
  pub tweets_csv_path: String,

  /// Path to the ticker lookup CSV file
  pub tickers_csv_path: String,

  /// Path to the polarity lexicon CSV file
  pub lexicon_csv_path: String,

  /// Minimum qualifying tweets for a company to appear in the sentiment table
  pub min_sentiment_tweets: usize,

  /// Row limit for top-N report queries
  pub top_n: usize,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let tweets_csv_path =
      env::var("TM_TWEETS_CSV").unwrap_or_else(|_| "./data/tweets.csv".to_string());

    let tickers_csv_path =
      env::var("TM_TICKERS_CSV").unwrap_or_else(|_| "./data/tickers.csv".to_string());

    let lexicon_csv_path =
      env::var("TM_LEXICON_CSV").unwrap_or_else(|_| "./data/lexicon.csv".to_string());

    let min_sentiment_tweets = env::var("TM_MIN_SENTIMENT_TWEETS")
      .unwrap_or_else(|_| crate::MIN_SENTIMENT_TWEETS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid TM_MIN_SENTIMENT_TWEETS".to_string()))?;

    let top_n = env::var("TM_TOP_N")
      .unwrap_or_else(|_| crate::DEFAULT_TOP_N.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid TM_TOP_N".to_string()))?;

    Ok(Config { tweets_csv_path, tickers_csv_path, lexicon_csv_path, min_sentiment_tweets, top_n })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_paths(tweets: String, tickers: String, lexicon: String) -> Self {
    Config {
      tweets_csv_path: tweets,
      tickers_csv_path: tickers,
      lexicon_csv_path: lexicon,
      min_sentiment_tweets: crate::MIN_SENTIMENT_TWEETS,
      top_n: crate::DEFAULT_TOP_N,
    }
  }
}
