//! Tweet loader that reads the tweet table from CSV and filters rows
//! without usable text

use indicatif::ProgressBar;
use tracing::{debug, info};

use tm_models::tweet::TweetRecord;
use crate::{
  DataLoader, LoaderContext, LoaderResult,
  csv_processor::CsvProcessor,
  run_tracker::RunState,
};

pub struct TweetLoader;

impl TweetLoader {
  pub fn new() -> Self {
    Self
  }
}

impl Default for TweetLoader {
  fn default() -> Self {
    Self::new()
  }
}

impl DataLoader for TweetLoader {
  type Input = TweetLoaderInput;
  type Output = TweetLoaderOutput;

  fn load(&self, context: &LoaderContext, input: Self::Input) -> LoaderResult<Self::Output> {
    info!("Loading tweets from {:?}", input.file_path);

    if let Some(tracker) = &context.run_tracker {
      tracker.start("tweet_loader")?;
    }

    let processor = CsvProcessor::new();
    let rows = processor.parse_tweet_rows(&input.file_path)?;
    let total_rows = rows.len();

    let progress = if context.config.show_progress {
      Some(ProgressBar::new(total_rows as u64))
    } else {
      None
    };

    let mut data = Vec::with_capacity(total_rows);
    let mut skipped = 0usize;

    for (row_num, row) in rows.into_iter().enumerate() {
      if let Some(pb) = &progress {
        if row_num as u64 % context.config.progress_chunk == 0 {
          pb.set_position(row_num as u64);
        }
      }

      match row.text {
        Some(text) => {
          data.push(TweetRecord { text, timestamp: row.timestamp, source: row.source });
        }
        None => {
          if context.config.log_skipped {
            debug!("Skipping row {} with missing text", row_num);
          }
          skipped += 1;
        }
      }
    }

    if let Some(pb) = &progress {
      pb.finish_with_message("Tweet loading complete");
    }

    if let Some(tracker) = &context.run_tracker {
      tracker.complete(RunState::Success, data.len())?;
    }

    info!("Tweet loading complete: {} loaded, {} skipped (missing text)", data.len(), skipped);

    Ok(TweetLoaderOutput { total_rows, loaded_count: data.len(), skipped_count: skipped, data })
  }

  fn name(&self) -> &'static str {
    "TweetLoader"
  }
}

#[derive(Debug)]
pub struct TweetLoaderInput {
  pub file_path: String,
}

#[derive(Debug)]
pub struct TweetLoaderOutput {
  pub total_rows: usize,
  pub loaded_count: usize,
  pub skipped_count: usize,
  pub data: Vec<TweetRecord>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::loader::LoaderConfig;
  use std::io::Write;
  use tempfile::NamedTempFile;

  fn quiet_context() -> LoaderContext {
    LoaderContext::new(LoaderConfig { show_progress: false, ..LoaderConfig::default() })
  }

  fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
  }

  #[test]
  fn test_tweet_loader_skips_missing_text() {
    let file = write_csv(
      "text,timestamp,source\n\
       I love $AAPL,2020-01-01,web\n\
       ,2020-01-02,web\n\
       $TSLA to the moon,2020-01-03,android\n",
    );
    let input = TweetLoaderInput { file_path: file.path().to_string_lossy().to_string() };
    let output = TweetLoader::new().load(&quiet_context(), input).unwrap();

    assert_eq!(output.total_rows, 3);
    assert_eq!(output.loaded_count, 2);
    assert_eq!(output.skipped_count, 1);
    assert_eq!(output.data[0].text, "I love $AAPL");
    assert_eq!(output.data[1].source, "android");
  }

  #[test]
  fn test_tweet_loader_empty_table() {
    let file = write_csv("text,timestamp,source\n");
    let input = TweetLoaderInput { file_path: file.path().to_string_lossy().to_string() };
    let output = TweetLoader::new().load(&quiet_context(), input).unwrap();

    assert_eq!(output.total_rows, 0);
    assert_eq!(output.loaded_count, 0);
    assert!(output.data.is_empty());
  }

  #[test]
  fn test_tweet_loader_missing_file() {
    let input = TweetLoaderInput { file_path: "/nonexistent/tweets.csv".to_string() };
    let result = TweetLoader::new().load(&quiet_context(), input);
    assert!(result.is_err());
  }

  #[test]
  fn test_tweet_loader_name() {
    assert_eq!(TweetLoader::new().name(), "TweetLoader");
  }

  #[test]
  fn test_tweet_loader_records_run() {
    let file = write_csv("text,timestamp,source\nhello,2020-01-01,web\n");
    let input = TweetLoaderInput { file_path: file.path().to_string_lossy().to_string() };
    let context = quiet_context().with_run_tracker(crate::RunTracker::new());
    TweetLoader::new().load(&context, input).unwrap();

    let stages = context.run_tracker.as_ref().unwrap().get_all();
    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].stage_name, "tweet_loader");
    assert_eq!(stages[0].records_processed, Some(1));
  }
}
