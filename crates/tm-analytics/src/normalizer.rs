//! Tweet text normalization
//!
//! Operations, in order: lowercase, URL removal, punctuation replacement.
//! The dollar sign survives punctuation replacement so that downstream
//! ticker extraction can still key on `$`.

use regex::Regex;
use std::sync::OnceLock;

static URL_RE: OnceLock<Regex> = OnceLock::new();

fn url_re() -> &'static Regex {
  URL_RE.get_or_init(|| Regex::new(r"https?://\S+").expect("invalid URL pattern"))
}

/// Normalize raw tweet text.
///
/// Returns `None` when the input is empty or normalizes to whitespace only;
/// callers drop such rows without raising an error.
pub fn normalize(text: &str) -> Option<String> {
  if text.trim().is_empty() {
    return None;
  }

  let lowered = text.to_lowercase();
  let without_urls = url_re().replace_all(&lowered, " ");

  let cleaned: String = without_urls
    .chars()
    .map(|c| {
      if c.is_ascii_punctuation() && c != '$' {
        ' '
      } else {
        c
      }
    })
    .collect();

  let trimmed = cleaned.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_lowercases() {
    assert_eq!(normalize("Big Day For Stocks").as_deref(), Some("big day for stocks"));
  }

  #[test]
  fn test_normalize_strips_urls() {
    let out = normalize("check this https://example.com/x?y=1 out").unwrap();
    assert!(!out.contains("example"));
    assert!(out.starts_with("check this"));
    assert!(out.ends_with("out"));
  }

  #[test]
  fn test_normalize_strips_http_urls() {
    let out = normalize("see http://t.co/abc123").unwrap();
    assert_eq!(out, "see");
  }

  #[test]
  fn test_normalize_replaces_punctuation() {
    assert_eq!(normalize("wow!!! great, right?").as_deref(), Some("wow    great  right"));
  }

  #[test]
  fn test_normalize_keeps_dollar_sign() {
    assert_eq!(normalize("I love $AAPL, truly.").as_deref(), Some("i love $aapl  truly"));
  }

  #[test]
  fn test_normalize_empty_input() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("   "), None);
  }

  #[test]
  fn test_normalize_punctuation_only_input() {
    assert_eq!(normalize("!!! ... ???"), None);
  }

  #[test]
  fn test_normalize_url_only_input() {
    assert_eq!(normalize("https://example.com"), None);
  }
}
