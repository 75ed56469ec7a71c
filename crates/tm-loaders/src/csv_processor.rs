//! CSV file processor for reading the pipeline's input tables
//!
//! Supports three inputs:
//! - Tweet tables (free-form column order, located by header name)
//! - Ticker lookup tables (ticker,name with NASDAQ-style header aliases)
//! - Polarity lexicons (word,polarity; tidytext-style "sentiment" header
//!   accepted)
//!
//! The processor tolerates extra whitespace and varying column names;
//! row-level filtering (missing text, unknown polarity tags) is the
//! loaders' job.

use csv::Reader;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use crate::LoaderResult;

/// A tweet row exactly as read, before missing-text filtering
#[derive(Debug, Clone)]
pub struct RawTweetRow {
    pub text: Option<String>,
    pub timestamp: String,
    pub source: String,
}

pub struct CsvProcessor;

impl CsvProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Parse a tweet table. Columns are located by header name: the text
    /// column is required, timestamp and source fall back to empty strings
    /// when the table does not carry them.
    pub fn parse_tweet_rows<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> LoaderResult<Vec<RawTweetRow>> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);

        let headers = reader.headers()?;

        let text_index = headers.iter().position(|h| {
            h.to_lowercase().trim() == "text" || h.to_lowercase().contains("tweet")
        }).unwrap_or(0);
        let timestamp_index = headers.iter().position(|h| {
            let h = h.to_lowercase();
            h.contains("timestamp") || h.contains("created")
        });
        let source_index = headers.iter().position(|h| {
            h.to_lowercase().trim() == "source"
        });

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let text = record
                .get(text_index)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());
            let timestamp = timestamp_index
                .and_then(|i| record.get(i))
                .map(|t| t.trim().to_string())
                .unwrap_or_default();
            let source = source_index
                .and_then(|i| record.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            rows.push(RawTweetRow { text, timestamp, source });
        }

        Ok(rows)
    }

    /// Parse a ticker lookup table (ticker,name format)
    pub fn parse_lookup_rows<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> LoaderResult<Vec<LookupRecord>> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let record: LookupRecord = result?;
            rows.push(record);
        }

        Ok(rows)
    }

    /// Parse a polarity lexicon (word,polarity format)
    pub fn parse_lexicon_rows<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> LoaderResult<Vec<LexiconRecord>> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let record: LexiconRecord = result?;
            rows.push(record);
        }

        Ok(rows)
    }
}

impl Default for CsvProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupRecord {
    #[serde(alias = "Ticker", alias = "symbol", alias = "Symbol")]
    pub ticker: String,

    #[serde(alias = "Name", alias = "company", alias = "Security Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LexiconRecord {
    #[serde(alias = "Word")]
    pub word: String,

    #[serde(alias = "sentiment", alias = "Sentiment")]
    pub polarity: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_tweet_rows() {
        let file = write_csv(
            "text,timestamp,source\n\
             Big day for $AAPL,2020-03-02 14:11:00,web\n\
             ,2020-03-02 14:12:00,android\n",
        );
        let rows = CsvProcessor::new().parse_tweet_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text.as_deref(), Some("Big day for $AAPL"));
        assert_eq!(rows[0].source, "web");
        assert!(rows[1].text.is_none());
    }

    #[test]
    fn test_parse_tweet_rows_column_order() {
        let file = write_csv(
            "source,created_at,text\n\
             web,2020-01-01,hello $MSFT\n",
        );
        let rows = CsvProcessor::new().parse_tweet_rows(file.path()).unwrap();
        assert_eq!(rows[0].text.as_deref(), Some("hello $MSFT"));
        assert_eq!(rows[0].timestamp, "2020-01-01");
        assert_eq!(rows[0].source, "web");
    }

    #[test]
    fn test_parse_tweet_rows_missing_optional_columns() {
        let file = write_csv("text\nhello there\n");
        let rows = CsvProcessor::new().parse_tweet_rows(file.path()).unwrap();
        assert_eq!(rows[0].text.as_deref(), Some("hello there"));
        assert_eq!(rows[0].timestamp, "");
        assert_eq!(rows[0].source, "");
    }

    #[test]
    fn test_parse_lookup_rows() {
        let file = write_csv("ticker,name\nAAPL,Apple Inc.\nMSFT,Microsoft Corp.\n");
        let rows = CsvProcessor::new().parse_lookup_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[1].name, "Microsoft Corp.");
    }

    #[test]
    fn test_parse_lexicon_rows_sentiment_header() {
        let file = write_csv("word,sentiment\ngreat,positive\nbad,negative\nmaybe,neutral\n");
        let rows = CsvProcessor::new().parse_lexicon_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].polarity, "neutral");
    }

    #[test]
    fn test_parse_missing_file() {
        let result = CsvProcessor::new().parse_tweet_rows("/nonexistent/tweets.csv");
        assert!(result.is_err());
    }
}
