/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use tm_analytics::{AnalysisReport, CompanyLookup, Lexicon, Pipeline};
use tm_core::ReportKind;
use tm_loaders::{
  DataLoader, LexiconLoader, LexiconLoaderInput, LoaderConfig, LoaderContext, LookupLoader,
  LookupLoaderInput, RunTracker, TweetLoader, TweetLoaderInput,
};
use tm_models::tweet::TweetRecord;

#[derive(Args, Debug)]
pub struct AnalyzeCommand {
  #[command(subcommand)]
  command: AnalyzeSubcommands,

  /// Override the tweet table path
  #[arg(long)]
  tweets: Option<String>,

  /// Override the ticker lookup table path
  #[arg(long)]
  tickers: Option<String>,

  /// Override the polarity lexicon path
  #[arg(long)]
  lexicon: Option<String>,

  /// Emit tables as JSON instead of text
  #[arg(long)]
  json: bool,
}

#[derive(Subcommand, Debug)]
enum AnalyzeSubcommands {
  /// Top-N most mentioned companies
  Mentions {
    /// Limit results
    #[arg(short, long)]
    limit: Option<usize>,
  },

  /// Top-N co-occurring ticker pairs
  Pairs {
    /// Limit results
    #[arg(short, long)]
    limit: Option<usize>,
  },

  /// Per-company net sentiment
  Sentiment {
    /// Minimum qualifying tweets per company
    #[arg(long)]
    min_tweets: Option<usize>,
  },

  /// Run everything and print all three tables
  All,
}

pub fn execute(cmd: AnalyzeCommand, config: Config) -> Result<()> {
  let config = config.with_overrides(cmd.tweets, cmd.tickers, cmd.lexicon);

  match cmd.command {
    AnalyzeSubcommands::Mentions { limit } => {
      let report = run_pipeline(&config, config.core.min_sentiment_tweets)?;
      let limit = limit.unwrap_or(config.core.top_n);
      if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.mentions.top_n(limit))?);
      } else {
        print_mentions(&report, limit);
      }
    }
    AnalyzeSubcommands::Pairs { limit } => {
      let report = run_pipeline(&config, config.core.min_sentiment_tweets)?;
      let limit = limit.unwrap_or(config.core.top_n);
      if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.pairs.top_n(limit))?);
      } else {
        print_pairs(&report, limit);
      }
    }
    AnalyzeSubcommands::Sentiment { min_tweets } => {
      let min_tweets = min_tweets.unwrap_or(config.core.min_sentiment_tweets);
      let report = run_pipeline(&config, min_tweets)?;
      if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.sentiment)?);
      } else {
        print_sentiment(&report);
      }
    }
    AnalyzeSubcommands::All => {
      let report = run_pipeline(&config, config.core.min_sentiment_tweets)?;
      print_mentions(&report, config.core.top_n);
      println!();
      print_pairs(&report, config.core.top_n);
      println!();
      print_sentiment(&report);
      println!();
      print_stats(&report);
    }
  }

  Ok(())
}

/// Load the three input tables and run one batch
fn run_pipeline(config: &Config, min_tweets: usize) -> Result<AnalysisReport> {
  let (records, lookup, lexicon) = load_inputs(config)?;
  let pipeline = Pipeline::new().with_min_sentiment_tweets(min_tweets);
  Ok(pipeline.run(records, &lookup, &lexicon))
}

fn load_inputs(config: &Config) -> Result<(Vec<TweetRecord>, CompanyLookup, Lexicon)> {
  let context = LoaderContext::new(LoaderConfig::default()).with_run_tracker(RunTracker::new());

  let tweets = TweetLoader::new()
    .load(&context, TweetLoaderInput { file_path: config.core.tweets_csv_path.clone() })?;

  let lookup_out = LookupLoader::new()
    .load(&context, LookupLoaderInput { file_path: config.core.tickers_csv_path.clone() })?;

  let lexicon_out = LexiconLoader::new()
    .load(&context, LexiconLoaderInput { file_path: config.core.lexicon_csv_path.clone() })?;

  info!(
    "Inputs loaded: {} tweets, {} lookup entries, {} lexicon words",
    tweets.loaded_count, lookup_out.loaded_count, lexicon_out.loaded_count
  );

  let lookup = CompanyLookup::from_rows(&lookup_out.data);
  let lexicon = Lexicon::from_entries(&lexicon_out.data);

  Ok((tweets.data, lookup, lexicon))
}

fn print_mentions(report: &AnalysisReport, limit: usize) {
  println!("== {} (top {}) ==", ReportKind::Mentions, limit);
  println!("{:<40} {:>10}", "Company", "Mentions");
  for row in report.mentions.top_n(limit) {
    println!("{:<40} {:>10}", row.company_name, row.count);
  }
}

fn print_pairs(report: &AnalysisReport, limit: usize) {
  println!("== {} (top {}) ==", ReportKind::CoOccurrence, limit);
  println!("{:<14} {:<14} {:>10}", "Ticker A", "Ticker B", "Tweets");
  for row in report.pairs.top_n(limit) {
    println!("{:<14} {:<14} {:>10}", row.pair.first, row.pair.second, row.count);
  }
}

fn print_sentiment(report: &AnalysisReport) {
  println!("== {} ==", ReportKind::Sentiment);
  println!("{:<40} {:>12} {:>10}", "Company", "Net", "Tweets");
  for row in &report.sentiment {
    println!("{:<40} {:>12} {:>10}", row.company_name, row.net_sentiment, row.tweet_count);
  }
}

fn print_stats(report: &AnalysisReport) {
  let stats = &report.stats;
  println!("Run summary ({})", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
  println!("  rows in:              {}", stats.rows_in);
  println!("  dropped (no text):    {}", stats.dropped_empty);
  println!("  tweets analyzed:      {}", stats.tweets_analyzed);
  println!("  tweets with tickers:  {}", stats.tweets_with_tickers);
  println!("  raw mentions:         {}", stats.raw_mentions);
  println!("  resolved mentions:    {}", stats.resolved_mentions);
  println!("  unresolved dropped:   {}", stats.unresolved_dropped);
}
