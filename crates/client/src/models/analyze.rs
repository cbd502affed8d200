//! Text analysis requests and their token stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Options for an analyze call.
///
/// By default the request is bound to the index, so index-defined analyzers
/// are available. [`AnalyzeOptions::unbound`] targets the cluster-wide
/// `/_analyze` endpoint instead, which works even when the index does not
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub analyzer: Option<String>,
    pub tokenizer: Option<String>,
    /// Comma-separated token filters, used with `tokenizer`.
    pub filters: Option<String>,
    /// Analyze with the analyzer mapped for this field.
    pub field: Option<String>,
    pub bind_to_index: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            analyzer: None,
            tokenizer: None,
            filters: None,
            field: None,
            bind_to_index: true,
        }
    }
}

impl AnalyzeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Into<String>) -> Self {
        self.tokenizer = Some(tokenizer.into());
        self
    }

    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn unbound(mut self) -> Self {
        self.bind_to_index = false;
        self
    }

    /// Query parameters for analyzing `text`.
    pub(crate) fn to_params(&self, text: &str) -> Vec<(String, String)> {
        let mut params = vec![("text".to_string(), text.to_string())];
        let optional = [
            ("analyzer", &self.analyzer),
            ("tokenizer", &self.tokenizer),
            ("filters", &self.filters),
            ("field", &self.field),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        }
        params
    }
}

/// One token emitted by an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeToken {
    pub token: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub start_offset: u64,
    #[serde(default, deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub end_offset: u64,
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::u64_from_string_or_number")]
    pub position: u64,
}

#[derive(Deserialize)]
struct TokensBody {
    tokens: Vec<AnalyzeToken>,
}

/// The tokens of one analysis, in emission order.
///
/// This is a one-shot iterator: once consumed it cannot be replayed. Run the
/// analysis again to get a fresh sequence.
#[derive(Debug)]
pub struct AnalyzedTokens {
    tokens: std::vec::IntoIter<AnalyzeToken>,
}

impl AnalyzedTokens {
    pub(crate) fn from_response(body: Value) -> Result<Self> {
        let parsed: TokensBody = serde_json::from_value(body)
            .map_err(|e| ClientError::MalformedResponse(format!("analyze response: {}", e)))?;
        Ok(Self {
            tokens: parsed.tokens.into_iter(),
        })
    }

    /// Consume the sequence, keeping only the token text.
    pub fn into_terms(self) -> Vec<String> {
        self.map(|t| t.token).collect()
    }
}

impl Iterator for AnalyzedTokens {
    type Item = AnalyzeToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl ExactSizeIterator for AnalyzedTokens {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_include_only_set_options() {
        let params = AnalyzeOptions::new()
            .with_analyzer("simple")
            .to_params("Just a few words");
        assert_eq!(
            params,
            vec![
                ("text".to_string(), "Just a few words".to_string()),
                ("analyzer".to_string(), "simple".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_is_bound() {
        assert!(AnalyzeOptions::default().bind_to_index);
        assert!(!AnalyzeOptions::new().unbound().bind_to_index);
    }

    #[test]
    fn test_tokens_in_order() {
        let body = json!({"tokens": [
            {"token": "just", "start_offset": 0, "end_offset": 4, "type": "word", "position": 1},
            {"token": "a", "start_offset": 5, "end_offset": 6, "type": "word", "position": 2}
        ]});
        let mut tokens = AnalyzedTokens::from_response(body).unwrap();
        assert_eq!(tokens.len(), 2);
        let first = tokens.next().unwrap();
        assert_eq!(first.token, "just");
        assert_eq!(first.token_type, "word");
        assert_eq!(tokens.into_terms(), vec!["a"]);
    }

    #[test]
    fn test_missing_tokens_is_malformed() {
        assert!(matches!(
            AnalyzedTokens::from_response(json!({"detail": {}})),
            Err(ClientError::MalformedResponse(_))
        ));
    }
}
