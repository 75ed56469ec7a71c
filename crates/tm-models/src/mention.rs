/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Ticker mention and co-occurrence model types

use serde::{Deserialize, Serialize};

/// One row of the static ticker lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerRow {
  /// Uppercase ticker symbol (unique key; duplicates are a data-quality
  /// condition resolved last-wins)
  pub ticker: String,

  /// Company name
  pub name: String,
}

/// A raw `$TICKER` token extracted from one tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerMention {
  /// Id of the tweet the token was found in
  pub tweet_id: i64,

  /// Uppercased ticker symbol, dollar sign stripped (1-6 letters)
  pub raw_ticker: String,
}

/// A ticker occurrence successfully matched to a known company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMention {
  /// Id of the tweet the mention came from
  pub tweet_id: i64,

  /// Company name from the lookup table
  pub company_name: String,
}

/// Mention frequency for one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionCount {
  /// Company name from the lookup table
  pub company_name: String,

  /// Number of resolved mentions across all tweets
  pub count: u64,
}

/// Canonically ordered pair of distinct tickers.
///
/// `new` sorts its endpoints lexicographically, so (A,B) and (B,A) always
/// produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TickerPair {
  /// Lexicographically smaller ticker
  pub first: String,

  /// Lexicographically larger ticker
  pub second: String,
}

impl TickerPair {
  pub fn new(a: &str, b: &str) -> Self {
    if a <= b {
      Self { first: a.to_string(), second: b.to_string() }
    } else {
      Self { first: b.to_string(), second: a.to_string() }
    }
  }
}

impl std::fmt::Display for TickerPair {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}-{}", self.first, self.second)
  }
}

/// Co-occurrence frequency for one canonical ticker pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoOccurrence {
  /// Canonical ticker pair
  pub pair: TickerPair,

  /// Number of tweets where both tickers appeared
  pub count: u64,
}
