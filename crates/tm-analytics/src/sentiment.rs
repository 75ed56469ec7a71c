//! Lexicon-based sentiment scoring
//!
//! Surface word match only: +1 per positive hit, -1 per negative hit,
//! repeated words count each time. No negation, intensifier or sarcasm
//! handling; the lexicon polarity is applied as-is.

use std::collections::HashMap;

use tm_models::sentiment::{CompanySentiment, LexiconEntry, Polarity, TweetSentimentScore};

/// Static word -> polarity lexicon
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
  words: HashMap<String, Polarity>,
}

impl Lexicon {
  pub fn from_entries(entries: &[LexiconEntry]) -> Self {
    let mut words = HashMap::with_capacity(entries.len());
    for entry in entries {
      words.insert(entry.word.clone(), entry.polarity);
    }
    Self { words }
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Net score of one normalized text: sum of hit weights over all
  /// whitespace-separated tokens
  pub fn score_text(&self, normalized: &str) -> i64 {
    normalized
      .split_whitespace()
      .filter_map(|token| self.words.get(token))
      .map(|polarity| polarity.weight())
      .sum()
  }
}

/// Accumulates per-tweet scores into per-company net sentiment.
///
/// A tweet counts once per distinct company it resolves to, regardless of
/// how many times the company's ticker appears in the text.
#[derive(Debug, Clone, Default)]
pub struct SentimentAggregator {
  totals: HashMap<String, (i64, u64)>,
}

impl SentimentAggregator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attribute one tweet's score to one company
  pub fn add(&mut self, company_name: &str, tweet_score: i64) {
    let entry = self.totals.entry(company_name.to_string()).or_insert((0, 0));
    entry.0 += tweet_score;
    entry.1 += 1;
  }

  /// Accumulate one per-tweet score row
  pub fn add_score(&mut self, row: &TweetSentimentScore) {
    self.add(&row.company_name, row.score);
  }

  /// Companies with at least `min_tweets` qualifying tweets, sorted
  /// descending by net sentiment, ties broken by company name
  pub fn report(&self, min_tweets: usize) -> Vec<CompanySentiment> {
    let mut rows: Vec<CompanySentiment> = self
      .totals
      .iter()
      .filter(|(_, (_, tweet_count))| *tweet_count >= min_tweets as u64)
      .map(|(company_name, (net_sentiment, tweet_count))| CompanySentiment {
        company_name: company_name.clone(),
        net_sentiment: *net_sentiment,
        tweet_count: *tweet_count,
      })
      .collect();
    rows.sort_by(|a, b| {
      b.net_sentiment.cmp(&a.net_sentiment).then_with(|| a.company_name.cmp(&b.company_name))
    });
    rows
  }
}
