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

//! Base traits and types for data loaders

use crate::{LoaderResult, RunTracker};

/// Configuration for data loaders
#[derive(Debug, Clone)]
pub struct LoaderConfig {
  /// Enable progress bars during ingestion
  pub show_progress: bool,

  /// Log each skipped row at debug level
  pub log_skipped: bool,

  /// Rows between progress bar updates
  pub progress_chunk: u64,
}

impl Default for LoaderConfig {
  fn default() -> Self {
    Self { show_progress: true, log_skipped: true, progress_chunk: 500 }
  }
}

/// Shared context for all loaders
pub struct LoaderContext {
  pub config: LoaderConfig,
  pub run_tracker: Option<RunTracker>,
}

impl LoaderContext {
  pub fn new(config: LoaderConfig) -> Self {
    Self { config, run_tracker: None }
  }

  pub fn with_run_tracker(mut self, tracker: RunTracker) -> Self {
    self.run_tracker = Some(tracker);
    self
  }
}

/// Base trait for all data loaders
pub trait DataLoader {
  /// The type of data this loader processes
  type Input;

  /// The result type after loading
  type Output;

  /// Load data from the given input
  fn load(&self, context: &LoaderContext, input: Self::Input) -> LoaderResult<Self::Output>;

  /// Validate input before loading
  fn validate_input(&self, _input: &Self::Input) -> LoaderResult<()> {
    Ok(())
  }

  /// Get loader name for logging/tracking
  fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_loader_config_default() {
    let config = LoaderConfig::default();
    assert!(config.show_progress);
    assert!(config.log_skipped);
    assert_eq!(config.progress_chunk, 500);
  }

  #[test]
  fn test_loader_config_custom() {
    let config = LoaderConfig { show_progress: false, log_skipped: false, progress_chunk: 100 };
    assert!(!config.show_progress);
    assert!(!config.log_skipped);
    assert_eq!(config.progress_chunk, 100);
  }

  #[test]
  fn test_loader_config_clone() {
    let config = LoaderConfig::default();
    let cloned = config.clone();
    assert_eq!(config.show_progress, cloned.show_progress);
    assert_eq!(config.progress_chunk, cloned.progress_chunk);
  }

  #[test]
  fn test_loader_config_debug() {
    let config = LoaderConfig::default();
    let debug_str = format!("{:?}", config);
    assert!(debug_str.contains("LoaderConfig"));
    assert!(debug_str.contains("show_progress"));
  }

  #[test]
  fn test_loader_context_new() {
    let context = LoaderContext::new(LoaderConfig::default());
    assert!(context.run_tracker.is_none());
    assert_eq!(context.config.progress_chunk, 500);
  }

  #[test]
  fn test_loader_context_with_run_tracker() {
    let tracker = RunTracker::new();
    let context = LoaderContext::new(LoaderConfig::default()).with_run_tracker(tracker);
    assert!(context.run_tracker.is_some());
  }

  #[test]
  fn test_loader_context_builder_chain() {
    let config = LoaderConfig { progress_chunk: 50, ..LoaderConfig::default() };
    let tracker = RunTracker::new();
    let context = LoaderContext::new(config).with_run_tracker(tracker);

    assert!(context.run_tracker.is_some());
    assert_eq!(context.config.progress_chunk, 50);
  }
}
