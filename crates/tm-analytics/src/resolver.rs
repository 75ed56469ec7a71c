//! Company resolution against the static ticker lookup table

use std::collections::HashMap;
use tracing::debug;

use tm_models::mention::{ResolvedMention, TickerMention, TickerRow};

/// Outcome of resolving one raw ticker against the lookup table.
///
/// Unknown tickers are the expected majority case in free text (`$WORD`
/// false positives), so `Unknown` is plain filtering, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
  /// Ticker is in the lookup table; carries the company name
  Known(&'a str),
  /// Ticker absent from the lookup table
  Unknown,
}

/// Static ticker -> company-name table, loaded once, read-only.
#[derive(Debug, Clone, Default)]
pub struct CompanyLookup {
  map: HashMap<String, String>,
}

impl CompanyLookup {
  /// Build the lookup from table rows in file order. Duplicate tickers
  /// resolve last-wins via plain map insertion; the loader has already
  /// warned about them.
  pub fn from_rows(rows: &[TickerRow]) -> Self {
    let mut map = HashMap::with_capacity(rows.len());
    for row in rows {
      map.insert(row.ticker.clone(), row.name.clone());
    }
    Self { map }
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  /// Resolve one uppercase ticker symbol
  pub fn resolve(&self, ticker: &str) -> Resolution<'_> {
    match self.map.get(ticker) {
      Some(name) => Resolution::Known(name),
      None => Resolution::Unknown,
    }
  }

  /// Resolve a batch of extracted mentions, silently dropping unknown
  /// tickers. Returns the resolved rows and the number dropped.
  pub fn resolve_mentions(&self, mentions: &[TickerMention]) -> (Vec<ResolvedMention>, usize) {
    let mut resolved = Vec::with_capacity(mentions.len());
    let mut dropped = 0usize;

    for mention in mentions {
      match self.resolve(&mention.raw_ticker) {
        Resolution::Known(name) => resolved.push(ResolvedMention {
          tweet_id: mention.tweet_id,
          company_name: name.to_string(),
        }),
        Resolution::Unknown => {
          debug!("Dropping unresolved ticker {}", mention.raw_ticker);
          dropped += 1;
        }
      }
    }

    (resolved, dropped)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_lookup() -> CompanyLookup {
    CompanyLookup::from_rows(&[
      TickerRow { ticker: "AAPL".to_string(), name: "Apple Inc.".to_string() },
      TickerRow { ticker: "MSFT".to_string(), name: "Microsoft Corp.".to_string() },
    ])
  }

  #[test]
  fn test_resolve_known_ticker() {
    let lookup = sample_lookup();
    assert_eq!(lookup.resolve("AAPL"), Resolution::Known("Apple Inc."));
  }

  #[test]
  fn test_resolve_unknown_ticker() {
    let lookup = sample_lookup();
    assert_eq!(lookup.resolve("ZZZZZZ"), Resolution::Unknown);
  }

  #[test]
  fn test_duplicate_ticker_last_wins() {
    let lookup = CompanyLookup::from_rows(&[
      TickerRow { ticker: "AAPL".to_string(), name: "Apple Inc.".to_string() },
      TickerRow { ticker: "AAPL".to_string(), name: "Apple Computer".to_string() },
    ]);
    assert_eq!(lookup.len(), 1);
    assert_eq!(lookup.resolve("AAPL"), Resolution::Known("Apple Computer"));
  }

  #[test]
  fn test_resolve_mentions_drops_unknown() {
    let lookup = sample_lookup();
    let mentions = vec![
      TickerMention { tweet_id: 1, raw_ticker: "AAPL".to_string() },
      TickerMention { tweet_id: 1, raw_ticker: "ZZZZZZ".to_string() },
      TickerMention { tweet_id: 2, raw_ticker: "MSFT".to_string() },
    ];
    let (resolved, dropped) = lookup.resolve_mentions(&mentions);

    assert_eq!(resolved.len(), 2);
    assert_eq!(dropped, 1);
    assert_eq!(resolved[0].company_name, "Apple Inc.");
    assert_eq!(resolved[1].tweet_id, 2);
  }

  #[test]
  fn test_empty_lookup() {
    let lookup = CompanyLookup::from_rows(&[]);
    assert!(lookup.is_empty());
    assert_eq!(lookup.resolve("AAPL"), Resolution::Unknown);
  }
}
