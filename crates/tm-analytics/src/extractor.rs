//! `$TICKER` token extraction from normalized tweet text

use regex::Regex;
use std::sync::OnceLock;

use tm_models::mention::TickerMention;

static TICKER_RE: OnceLock<Regex> = OnceLock::new();

fn ticker_re() -> &'static Regex {
  // 1..=MAX_TICKER_LEN letters after the dollar sign; a single
  // left-to-right scan of the text, so "$aa$bb" yields AA then BB
  TICKER_RE.get_or_init(|| {
    let pattern = format!(r"(?i)\$([a-z]{{1,{}}})", tm_core::MAX_TICKER_LEN);
    Regex::new(&pattern).expect("invalid ticker pattern")
  })
}

/// Extract all ticker symbols from normalized text, uppercased, dollar sign
/// stripped. A tweet may yield zero, one or many tickers.
pub fn extract_tickers(normalized: &str) -> Vec<String> {
  ticker_re()
    .captures_iter(normalized)
    .map(|cap| cap[1].to_uppercase())
    .collect()
}

/// Extract tickers from one tweet as `TickerMention` rows
pub fn extract_mentions(tweet_id: i64, normalized: &str) -> Vec<TickerMention> {
  extract_tickers(normalized)
    .into_iter()
    .map(|raw_ticker| TickerMention { tweet_id, raw_ticker })
    .collect()
}
