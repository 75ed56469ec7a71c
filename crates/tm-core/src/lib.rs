pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// The report tables produced by the analytics pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
  /// Per-company mention frequencies
  Mentions,
  /// Ticker pair co-occurrence counts
  CoOccurrence,
  /// Per-company net sentiment
  Sentiment,
}

// Implement Display trait for ReportKind
impl std::fmt::Display for ReportKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportKind::Mentions => write!(f, "MENTION_COUNTS"),
      ReportKind::CoOccurrence => write!(f, "CO_OCCURRENCE_PAIRS"),
      ReportKind::Sentiment => write!(f, "COMPANY_SENTIMENT"),
    }
  }
}

/// Maximum number of letters in a `$TICKER` token
pub const MAX_TICKER_LEN: usize = 6;

/// Minimum qualifying tweets before a company appears in the sentiment table
pub const MIN_SENTIMENT_TWEETS: usize = 50;

/// Default row limit for top-N report queries
pub const DEFAULT_TOP_N: usize = 10;
