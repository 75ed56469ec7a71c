//! Mention frequency aggregation

use std::collections::HashMap;

use tm_models::mention::{MentionCount, ResolvedMention};

/// Per-company mention frequencies
#[derive(Debug, Clone, Default)]
pub struct MentionCounts {
  counts: HashMap<String, u64>,
}

impl MentionCounts {
  pub fn from_mentions(mentions: &[ResolvedMention]) -> Self {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for mention in mentions {
      *counts.entry(mention.company_name.clone()).or_insert(0) += 1;
    }
    Self { counts }
  }

  /// Number of distinct companies mentioned
  pub fn company_count(&self) -> usize {
    self.counts.len()
  }

  /// Total resolved mentions across all companies
  pub fn total_mentions(&self) -> u64 {
    self.counts.values().sum()
  }

  /// Mention count for one company (0 when absent)
  pub fn get(&self, company_name: &str) -> u64 {
    self.counts.get(company_name).copied().unwrap_or(0)
  }

  /// All companies sorted descending by count, ties broken alphabetically
  /// by company name
  pub fn all_sorted(&self) -> Vec<MentionCount> {
    let mut rows: Vec<MentionCount> = self
      .counts
      .iter()
      .map(|(company_name, count)| MentionCount { company_name: company_name.clone(), count: *count })
      .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.company_name.cmp(&b.company_name)));
    rows
  }

  /// The N most-mentioned companies
  pub fn top_n(&self, n: usize) -> Vec<MentionCount> {
    let mut rows = self.all_sorted();
    rows.truncate(n);
    rows
  }
}
