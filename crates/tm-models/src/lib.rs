//! # tm-models
//!
//! Data models for the ticker-mentions analytics pipeline.
//!
//! This crate provides strongly-typed Rust structures for every table the
//! pipeline produces or consumes: tweets, ticker mentions, resolved company
//! mentions, mention counts, co-occurrence pairs and sentiment scores.
//!
//! ## Features
//!
//! - **Type Safety**: polarity and resolution outcomes are enums, not strings
//! - **Serde Integration**: built-in serialization/deserialization
//! - **Canonical Pair Keys**: `TickerPair` sorts its endpoints so (A,B) and
//!   (B,A) always collide on the same key
//!
//! ## Usage
//!
//! ```ignore
//! use tm_models::mention::TickerPair;
//!
//! let pair = TickerPair::new("MSFT", "AAPL");
//! assert_eq!(pair.first, "AAPL");
//! ```

#![warn(clippy::all)]

pub mod mention;
pub mod sentiment;
pub mod tweet;

// Re-export all model types
pub use mention::*;
pub use sentiment::*;
pub use tweet::*;
