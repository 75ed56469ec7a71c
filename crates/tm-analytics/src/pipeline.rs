//! End-to-end batch pipeline
//!
//! One pass of the full dataset through each stage: normalize, extract,
//! resolve, then count mentions, pairs and sentiment. Re-running on the
//! same input yields the same tables.

use std::collections::BTreeSet;
use tracing::info;

use tm_models::mention::ResolvedMention;
use tm_models::sentiment::{CompanySentiment, TweetSentimentScore};
use tm_models::tweet::{Tweet, TweetRecord};

use crate::cooccurrence::CoOccurrenceCounts;
use crate::extractor::extract_mentions;
use crate::mentions::MentionCounts;
use crate::normalizer::normalize;
use crate::resolver::{CompanyLookup, Resolution};
use crate::sentiment::{Lexicon, SentimentAggregator};

/// Row counters for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
  /// Tweet records handed to the pipeline
  pub rows_in: usize,

  /// Rows dropped because normalization yielded nothing
  pub dropped_empty: usize,

  /// Tweets that survived normalization
  pub tweets_analyzed: usize,

  /// Tweets with at least one raw ticker token
  pub tweets_with_tickers: usize,

  /// Raw `$TICKER` tokens extracted
  pub raw_mentions: usize,

  /// Mentions resolved against the lookup table
  pub resolved_mentions: usize,

  /// Mentions dropped as unresolved
  pub unresolved_dropped: usize,
}

/// The three output tables of one batch run, plus counters
#[derive(Debug, Clone)]
pub struct AnalysisReport {
  /// Per-company mention frequencies
  pub mentions: MentionCounts,

  /// Ticker pair co-occurrence counts
  pub pairs: CoOccurrenceCounts,

  /// Per-company net sentiment, threshold already applied
  pub sentiment: Vec<CompanySentiment>,

  /// Row counters
  pub stats: PipelineStats,
}

/// Batch pipeline configuration and entry point
#[derive(Debug, Clone)]
pub struct Pipeline {
  min_sentiment_tweets: usize,
}

impl Pipeline {
  pub fn new() -> Self {
    Self { min_sentiment_tweets: tm_core::MIN_SENTIMENT_TWEETS }
  }

  /// Override the sentiment tweet-count threshold
  pub fn with_min_sentiment_tweets(mut self, min_tweets: usize) -> Self {
    self.min_sentiment_tweets = min_tweets;
    self
  }

  /// Run the full batch over the given records
  pub fn run(
    &self,
    records: Vec<TweetRecord>,
    lookup: &CompanyLookup,
    lexicon: &Lexicon,
  ) -> AnalysisReport {
    let mut stats = PipelineStats { rows_in: records.len(), ..PipelineStats::default() };

    // Normalize; rows that clean down to nothing are dropped, ids are
    // assigned sequentially over the survivors
    let mut tweets: Vec<Tweet> = Vec::with_capacity(records.len());
    for record in records {
      match normalize(&record.text) {
        Some(normalized_text) => {
          let id = tweets.len() as i64;
          tweets.push(Tweet::new(id, record.text, normalized_text, record.source, record.timestamp));
        }
        None => stats.dropped_empty += 1,
      }
    }
    stats.tweets_analyzed = tweets.len();

    let mut all_resolved: Vec<ResolvedMention> = Vec::new();
    let mut pairs = CoOccurrenceCounts::new();
    let mut aggregator = SentimentAggregator::new();

    for tweet in &tweets {
      let raw_mentions = extract_mentions(tweet.id, &tweet.normalized_text);
      if raw_mentions.is_empty() {
        continue;
      }
      stats.tweets_with_tickers += 1;
      stats.raw_mentions += raw_mentions.len();

      // Resolve each raw token; keep the resolved ticker symbols for pair
      // counting and the company names for mention/sentiment tables
      let mut resolved_tickers: Vec<String> = Vec::with_capacity(raw_mentions.len());
      let mut companies: BTreeSet<String> = BTreeSet::new();

      for mention in raw_mentions {
        match lookup.resolve(&mention.raw_ticker) {
          Resolution::Known(name) => {
            all_resolved.push(ResolvedMention {
              tweet_id: mention.tweet_id,
              company_name: name.to_string(),
            });
            companies.insert(name.to_string());
            resolved_tickers.push(mention.raw_ticker);
          }
          Resolution::Unknown => stats.unresolved_dropped += 1,
        }
      }

      pairs.add_tweet(&resolved_tickers);

      if !companies.is_empty() {
        let score = lexicon.score_text(&tweet.normalized_text);
        for company_name in companies {
          aggregator.add_score(&TweetSentimentScore { tweet_id: tweet.id, company_name, score });
        }
      }
    }

    stats.resolved_mentions = all_resolved.len();

    let mentions = MentionCounts::from_mentions(&all_resolved);
    let sentiment = aggregator.report(self.min_sentiment_tweets);

    info!(
      "Pipeline complete: {} rows in, {} dropped, {} resolved mentions, {} companies, {} pairs",
      stats.rows_in,
      stats.dropped_empty,
      stats.resolved_mentions,
      mentions.company_count(),
      pairs.pair_count()
    );

    AnalysisReport { mentions, pairs, sentiment, stats }
  }
}

impl Default for Pipeline {
  fn default() -> Self {
    Self::new()
  }
}
