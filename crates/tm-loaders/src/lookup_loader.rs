//! Ticker lookup table loader with duplicate-key detection

use std::collections::HashSet;
use tracing::{info, warn};

use tm_models::mention::TickerRow;
use crate::{
  DataLoader, LoaderContext, LoaderResult, LoaderError,
  csv_processor::CsvProcessor,
  run_tracker::RunState,
};

pub struct LookupLoader;

impl LookupLoader {
  pub fn new() -> Self {
    Self
  }
}

impl Default for LookupLoader {
  fn default() -> Self {
    Self::new()
  }
}

impl DataLoader for LookupLoader {
  type Input = LookupLoaderInput;
  type Output = LookupLoaderOutput;

  fn load(&self, context: &LoaderContext, input: Self::Input) -> LoaderResult<Self::Output> {
    info!("Loading ticker lookup table from {:?}", input.file_path);

    if let Some(tracker) = &context.run_tracker {
      tracker.start("lookup_loader")?;
    }

    let processor = CsvProcessor::new();
    let records = processor.parse_lookup_rows(&input.file_path)?;
    let total_rows = records.len();

    // Duplicate tickers in the static table are a data-quality condition.
    // Rows are kept in file order; the map built downstream applies
    // last-wins on insert.
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicate_count = 0usize;
    let mut data = Vec::with_capacity(total_rows);

    for record in records {
      let ticker = record.ticker.trim().to_uppercase();
      if ticker.is_empty() {
        continue;
      }
      if !seen.insert(ticker.clone()) {
        warn!("Duplicate ticker {} in lookup table, last entry wins", ticker);
        duplicate_count += 1;
      }
      data.push(TickerRow { ticker, name: record.name.trim().to_string() });
    }

    let state = if duplicate_count > 0 {
      RunState::CompletedWithErrors
    } else {
      RunState::Success
    };
    if let Some(tracker) = &context.run_tracker {
      tracker.complete(state, data.len())?;
    }

    info!(
      "Lookup loading complete: {} entries, {} duplicate keys",
      data.len(),
      duplicate_count
    );

    Ok(LookupLoaderOutput { total_rows, loaded_count: data.len(), duplicate_count, data })
  }

  fn validate_input(&self, input: &Self::Input) -> LoaderResult<()> {
    if input.file_path.is_empty() {
      return Err(LoaderError::ConfigurationError("empty lookup table path".to_string()));
    }
    Ok(())
  }

  fn name(&self) -> &'static str {
    "LookupLoader"
  }
}

#[derive(Debug)]
pub struct LookupLoaderInput {
  pub file_path: String,
}

#[derive(Debug)]
pub struct LookupLoaderOutput {
  pub total_rows: usize,
  pub loaded_count: usize,
  pub duplicate_count: usize,
  pub data: Vec<TickerRow>,
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
  fn test_lookup_loader_uppercases_tickers() {
    let file = write_csv("ticker,name\naapl,Apple Inc.\nMSFT,Microsoft Corp.\n");
    let input = LookupLoaderInput { file_path: file.path().to_string_lossy().to_string() };
    let output = LookupLoader::new().load(&quiet_context(), input).unwrap();

    assert_eq!(output.loaded_count, 2);
    assert_eq!(output.data[0].ticker, "AAPL");
    assert_eq!(output.duplicate_count, 0);
  }

  #[test]
  fn test_lookup_loader_counts_duplicates() {
    let file = write_csv("ticker,name\nAAPL,Apple Inc.\nAAPL,Apple Computer\nTSLA,Tesla Inc.\n");
    let input = LookupLoaderInput { file_path: file.path().to_string_lossy().to_string() };
    let output = LookupLoader::new().load(&quiet_context(), input).unwrap();

    assert_eq!(output.total_rows, 3);
    assert_eq!(output.loaded_count, 3);
    assert_eq!(output.duplicate_count, 1);
    // file order preserved so a downstream map insert applies last-wins
    assert_eq!(output.data[1].name, "Apple Computer");
  }

  #[test]
  fn test_lookup_loader_validate_input() {
    let loader = LookupLoader::new();
    let empty = LookupLoaderInput { file_path: String::new() };
    assert!(loader.validate_input(&empty).is_err());

    let ok = LookupLoaderInput { file_path: "tickers.csv".to_string() };
    assert!(loader.validate_input(&ok).is_ok());
  }

  #[test]
  fn test_lookup_loader_name() {
    assert_eq!(LookupLoader::new().name(), "LookupLoader");
  }
}
