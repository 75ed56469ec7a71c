//! Run tracking for monitoring ingestion stages
//! In-memory only; the pipeline has no persistent state

use crate::LoaderResult;
use chrono::{DateTime, Utc};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
  Running,
  Success,
  Failed,
  CompletedWithErrors,
}

#[derive(Debug, Clone)]
pub struct RunInfo {
  pub stage_name: String,
  pub start_time: DateTime<Utc>,
  pub end_time: Option<DateTime<Utc>>,
  pub state: RunState,
  pub records_processed: Option<usize>,
}

/// In-memory tracker for the ingestion stages of one batch run
pub struct RunTracker {
  stages: RefCell<Vec<RunInfo>>,
}

impl RunTracker {
  pub fn new() -> Self {
    Self { stages: RefCell::new(Vec::new()) }
  }

  pub fn start(&self, stage_name: &str) -> LoaderResult<()> {
    self.stages.borrow_mut().push(RunInfo {
      stage_name: stage_name.to_string(),
      start_time: Utc::now(),
      end_time: None,
      state: RunState::Running,
      records_processed: None,
    });
    Ok(())
  }

  pub fn complete(&self, state: RunState, records_processed: usize) -> LoaderResult<()> {
    let mut stages = self.stages.borrow_mut();
    if let Some(last) = stages.last_mut() {
      last.state = state;
      last.end_time = Some(Utc::now());
      last.records_processed = Some(records_processed);
    }
    Ok(())
  }

  pub fn get_all(&self) -> Vec<RunInfo> {
    self.stages.borrow().clone()
  }
}

impl Default for RunTracker {
  fn default() -> Self {
    Self::new()
  }
}
