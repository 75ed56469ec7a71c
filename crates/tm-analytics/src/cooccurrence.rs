//! Ticker pair co-occurrence counting
//!
//! Combinatorial, not sequential: a tweet mentioning m distinct resolved
//! tickers contributes C(m,2) pairs, all weighted equally regardless of
//! position in the text.

use std::collections::{BTreeSet, HashMap};

use tm_models::mention::{CoOccurrence, TickerPair};

/// Global pair counter keyed by canonicalized ticker pairs
#[derive(Debug, Clone, Default)]
pub struct CoOccurrenceCounts {
  counts: HashMap<TickerPair, u64>,
}

impl CoOccurrenceCounts {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one tweet's resolved tickers. Duplicates collapse to the
  /// distinct set; fewer than 2 distinct tickers contributes nothing.
  pub fn add_tweet(&mut self, tickers: &[String]) {
    let distinct: BTreeSet<&str> = tickers.iter().map(|t| t.as_str()).collect();
    if distinct.len() < 2 {
      return;
    }

    let symbols: Vec<&str> = distinct.into_iter().collect();
    for i in 0..symbols.len() {
      for j in (i + 1)..symbols.len() {
        let pair = TickerPair::new(symbols[i], symbols[j]);
        *self.counts.entry(pair).or_insert(0) += 1;
      }
    }
  }

  /// Number of distinct pairs observed
  pub fn pair_count(&self) -> usize {
    self.counts.len()
  }

  /// Count for one pair, in either endpoint order (0 when absent)
  pub fn get(&self, a: &str, b: &str) -> u64 {
    self.counts.get(&TickerPair::new(a, b)).copied().unwrap_or(0)
  }

  /// All pairs sorted descending by count, ties broken by pair ordering
  pub fn all_sorted(&self) -> Vec<CoOccurrence> {
    let mut rows: Vec<CoOccurrence> = self
      .counts
      .iter()
      .map(|(pair, count)| CoOccurrence { pair: pair.clone(), count: *count })
      .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pair.cmp(&b.pair)));
    rows
  }

  /// The N most frequent pairs
  pub fn top_n(&self, n: usize) -> Vec<CoOccurrence> {
    let mut rows = self.all_sorted();
    rows.truncate(n);
    rows
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tickers(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn test_single_ticker_contributes_nothing() {
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["AAPL"]));
    assert_eq!(counts.pair_count(), 0);
  }

  #[test]
  fn test_pair_increment() {
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["AAPL", "MSFT"]));
    assert_eq!(counts.pair_count(), 1);
    assert_eq!(counts.get("AAPL", "MSFT"), 1);
    assert_eq!(counts.get("MSFT", "AAPL"), 1);
  }

  #[test]
  fn test_duplicates_collapse_to_distinct_set() {
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["AAPL", "AAPL", "MSFT"]));
    assert_eq!(counts.get("AAPL", "MSFT"), 1);
  }

  #[test]
  fn test_all_distinct_pairs_enumerated() {
    // 5 distinct tickers -> C(5,2) = 10 pairs
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["A", "B", "C", "D", "E"]));
    assert_eq!(counts.pair_count(), 10);
    assert_eq!(counts.get("A", "E"), 1);
    assert_eq!(counts.get("C", "D"), 1);
  }

  #[test]
  fn test_counts_accumulate_across_tweets() {
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["AAPL", "MSFT"]));
    counts.add_tweet(&tickers(&["MSFT", "AAPL", "TSLA"]));
    assert_eq!(counts.get("AAPL", "MSFT"), 2);
    assert_eq!(counts.get("AAPL", "TSLA"), 1);
    assert_eq!(counts.get("MSFT", "TSLA"), 1);
  }

  #[test]
  fn test_top_n_ordering() {
    let mut counts = CoOccurrenceCounts::new();
    counts.add_tweet(&tickers(&["AAPL", "MSFT"]));
    counts.add_tweet(&tickers(&["AAPL", "MSFT"]));
    counts.add_tweet(&tickers(&["AAPL", "TSLA"]));

    let top = counts.top_n(2);
    assert_eq!(top[0].pair, TickerPair::new("AAPL", "MSFT"));
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].pair, TickerPair::new("AAPL", "TSLA"));
  }

  #[test]
  fn test_empty_counts() {
    let counts = CoOccurrenceCounts::new();
    assert_eq!(counts.pair_count(), 0);
    assert!(counts.top_n(5).is_empty());
  }
}
