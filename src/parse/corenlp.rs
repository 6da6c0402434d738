//! CoreNLP HTTP parse server client
//!
//! Sends one sentence per request to a CoreNLP-style server and decodes the
//! bracketed `parse` annotation of the first (and only) sentence. The server
//! is configured for single-sentence input, matching the pipeline's
//! one-sentence-at-a-time contract.

use crate::error::{NerError, Result};
use crate::parse::{treebank, ConstituencyParser, ParseTree};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Annotator properties requested from the server
const PARSE_PROPERTIES: &str = r#"{"annotators":"tokenize,ssplit,parse","ssplit.isOneSentence":"true","outputFormat":"json"}"#;

/// Constituency parser backed by a CoreNLP HTTP server
pub struct CoreNlpParser {
    url: Url,
    client: reqwest::Client,
}

/// CoreNLP JSON response format (only the fields we read)
#[derive(Debug, Deserialize)]
struct ParseResponse {
    #[serde(default)]
    sentences: Vec<ParsedSentence>,
}

#[derive(Debug, Deserialize)]
struct ParsedSentence {
    parse: String,
}

impl CoreNlpParser {
    /// Create a client for the parse server at `url`
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ConstituencyParser for CoreNlpParser {
    async fn parse(&self, sentence: &str) -> Result<ParseTree> {
        debug!("Requesting parse from {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .query(&[("properties", PARSE_PROPERTIES)])
            .body(sentence.to_string())
            .send()
            .await
            .map_err(|e| NerError::Parse(format!("parse server unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(NerError::Parse(format!(
                "parse server returned status {}",
                response.status()
            )));
        }

        let decoded: ParseResponse = response
            .json()
            .await
            .map_err(|e| NerError::Parse(format!("invalid parse server response: {e}")))?;

        let first = decoded
            .sentences
            .into_iter()
            .next()
            .ok_or_else(|| NerError::Parse("parser produced no tree for input".to_string()))?;

        treebank::read_tree(&first.parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decoding() {
        let raw = r#"{"sentences":[{"index":0,"parse":"(ROOT (S (NP (NNP Paris))))"}]}"#;
        let decoded: ParseResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.sentences.len(), 1);
        let tree = treebank::read_tree(&decoded.sentences[0].parse).unwrap();
        assert_eq!(tree.text(), "Paris");
    }

    #[test]
    fn test_response_without_sentences() {
        let decoded: ParseResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.sentences.is_empty());
    }
}
