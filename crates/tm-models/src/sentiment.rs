//! Polarity lexicon and sentiment score model types

use serde::{Deserialize, Serialize};

/// Word polarity in the sentiment lexicon.
///
/// Only positive and negative entries participate in scoring; any other
/// category in the source lexicon is skipped at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
  Positive,
  Negative,
}

impl Polarity {
  /// Parse a lexicon polarity tag. Returns `None` for categories that do
  /// not participate in scoring (neutral, litigious, etc.).
  pub fn parse(tag: &str) -> Option<Self> {
    match tag.trim().to_lowercase().as_str() {
      "positive" => Some(Polarity::Positive),
      "negative" => Some(Polarity::Negative),
      _ => None,
    }
  }

  /// Score contribution of one word hit
  pub fn weight(&self) -> i64 {
    match self {
      Polarity::Positive => 1,
      Polarity::Negative => -1,
    }
  }
}

impl std::fmt::Display for Polarity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Polarity::Positive => write!(f, "positive"),
      Polarity::Negative => write!(f, "negative"),
    }
  }
}

/// One word in the polarity lexicon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
  /// Lowercase surface form
  pub word: String,

  /// Tagged polarity
  pub polarity: Polarity,
}

/// Net sentiment of one tweet attributed to one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetSentimentScore {
  /// Id of the scored tweet
  pub tweet_id: i64,

  /// Company the tweet resolved to
  pub company_name: String,

  /// Positive word hits minus negative word hits
  pub score: i64,
}

/// Aggregated net sentiment for one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySentiment {
  /// Company name from the lookup table
  pub company_name: String,

  /// Sum of per-tweet scores across qualifying tweets
  pub net_sentiment: i64,

  /// Number of tweets that resolved to this company
  pub tweet_count: u64,
}
