//! Polarity lexicon loader
//!
//! Only positive and negative entries participate in scoring; any other
//! category (neutral, litigious, uncertainty ...) is skipped and counted.

use tracing::{debug, info};

use tm_models::sentiment::{LexiconEntry, Polarity};
use crate::{
  DataLoader, LoaderContext, LoaderResult,
  csv_processor::CsvProcessor,
  run_tracker::RunState,
};

pub struct LexiconLoader;

impl LexiconLoader {
  pub fn new() -> Self {
    Self
  }
}

impl Default for LexiconLoader {
  fn default() -> Self {
    Self::new()
  }
}

impl DataLoader for LexiconLoader {
  type Input = LexiconLoaderInput;
  type Output = LexiconLoaderOutput;

  fn load(&self, context: &LoaderContext, input: Self::Input) -> LoaderResult<Self::Output> {
    info!("Loading polarity lexicon from {:?}", input.file_path);

    if let Some(tracker) = &context.run_tracker {
      tracker.start("lexicon_loader")?;
    }

    let processor = CsvProcessor::new();
    let records = processor.parse_lexicon_rows(&input.file_path)?;
    let total_rows = records.len();

    let mut data = Vec::with_capacity(total_rows);
    let mut skipped = 0usize;

    for record in records {
      let word = record.word.trim().to_lowercase();
      if word.is_empty() {
        skipped += 1;
        continue;
      }
      match Polarity::parse(&record.polarity) {
        Some(polarity) => data.push(LexiconEntry { word, polarity }),
        None => {
          if context.config.log_skipped {
            debug!("Skipping lexicon word {:?} with category {:?}", word, record.polarity);
          }
          skipped += 1;
        }
      }
    }

    if let Some(tracker) = &context.run_tracker {
      tracker.complete(RunState::Success, data.len())?;
    }

    info!(
      "Lexicon loading complete: {} scoring entries, {} skipped (non-polar categories)",
      data.len(),
      skipped
    );

    Ok(LexiconLoaderOutput { total_rows, loaded_count: data.len(), skipped_count: skipped, data })
  }

  fn name(&self) -> &'static str {
    "LexiconLoader"
  }
}

#[derive(Debug)]
pub struct LexiconLoaderInput {
  pub file_path: String,
}

#[derive(Debug)]
pub struct LexiconLoaderOutput {
  pub total_rows: usize,
  pub loaded_count: usize,
  pub skipped_count: usize,
  pub data: Vec<LexiconEntry>,
}
