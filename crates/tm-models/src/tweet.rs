//! Tweet records as ingested from the tweet CSV table

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A raw tweet row as delivered by the loader, before normalization.
///
/// Rows with a missing or empty text field never make it this far; the
/// loader drops them during ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
  /// Raw tweet text
  pub text: String,

  /// Publication timestamp, verbatim
  pub timestamp: String,

  /// Publishing client or feed
  pub source: String,
}

/// A single tweet after ingestion and text normalization.
///
/// Immutable once normalized; `id` is assigned sequentially in file order
/// when the source table carries no id column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
  /// Sequentially assigned row id
  pub id: i64,

  /// Raw tweet text as found in the source table
  pub text: String,

  /// Lowercased, URL-stripped, punctuation-cleaned text
  pub normalized_text: String,

  /// Publishing client or feed the tweet came from
  pub source: String,

  /// Publication timestamp, kept verbatim from the source table
  pub timestamp: String,
}

impl Tweet {
  pub fn new(
    id: i64,
    text: String,
    normalized_text: String,
    source: String,
    timestamp: String,
  ) -> Self {
    Self { id, text, normalized_text, source, timestamp }
  }

  /// Try to parse the verbatim timestamp. The source tables carry a couple
  /// of datetime formats; `None` when none of them match.
  pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];
    FORMATS
      .iter()
      .find_map(|fmt| NaiveDateTime::parse_from_str(&self.timestamp, fmt).ok())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tweet_new() {
    let tweet = Tweet::new(
      7,
      "Big day for $AAPL!".to_string(),
      "big day for $aapl".to_string(),
      "web".to_string(),
      "2020-03-02 14:11:00".to_string(),
    );
    assert_eq!(tweet.id, 7);
    assert_eq!(tweet.normalized_text, "big day for $aapl");
  }

  #[test]
  fn test_parsed_timestamp() {
    let tweet = Tweet::new(
      0,
      "x".to_string(),
      "x".to_string(),
      "web".to_string(),
      "2020-03-02 14:11:00".to_string(),
    );
    let parsed = tweet.parsed_timestamp().unwrap();
    assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2020-03-02");
  }

  #[test]
  fn test_parsed_timestamp_unknown_format() {
    let tweet = Tweet::new(
      0,
      "x".to_string(),
      "x".to_string(),
      "web".to_string(),
      "yesterday".to_string(),
    );
    assert!(tweet.parsed_timestamp().is_none());
  }

  #[test]
  fn test_tweet_serde_roundtrip() {
    let tweet = Tweet::new(
      0,
      "hello".to_string(),
      "hello".to_string(),
      "android".to_string(),
      "2020-01-01".to_string(),
    );
    let json = serde_json::to_string(&tweet).unwrap();
    let back: Tweet = serde_json::from_str(&json).unwrap();
    assert_eq!(tweet, back);
  }
}
