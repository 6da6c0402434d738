//! SPARQL transport seam and HTTP implementation
//!
//! The resolver depends on [`SparqlTransport`] rather than a concrete HTTP
//! client, so tests (and alternative executors) can substitute their own
//! query execution. The HTTP implementation speaks the SPARQL 1.1 protocol:
//! GET with a `query` parameter, results decoded from the JSON results
//! format.

use crate::error::{NerError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// One RDF term from a result binding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RdfTerm {
    /// Term kind: `uri`, `literal`, or `bnode`
    #[serde(rename = "type")]
    pub term_type: String,

    /// The term's lexical value
    pub value: String,
}

/// One solution row: variable name to bound term
pub type Row = HashMap<String, RdfTerm>;

/// SPARQL 1.1 JSON results format (only the fields we read)
#[derive(Debug, Deserialize)]
struct SelectResponse {
    results: SelectResults,
}

#[derive(Debug, Deserialize)]
struct SelectResults {
    #[serde(default)]
    bindings: Vec<Row>,
}

/// Capability interface for executing SELECT queries
#[async_trait]
pub trait SparqlTransport: Send + Sync {
    /// Execute a SELECT query and return its solution rows in order
    ///
    /// An empty row set is a successful outcome; transport, endpoint, and
    /// decoding failures are errors.
    async fn select(&self, query: &str) -> Result<Vec<Row>>;
}

/// HTTP transport for a remote SPARQL endpoint
pub struct HttpTransport {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for `endpoint` with no request timeout
    ///
    /// Without a timeout a hanging endpoint blocks the annotation call
    /// indefinitely; use [`HttpTransport::with_timeout`] where that matters.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport whose requests time out after `timeout`
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl SparqlTransport for HttpTransport {
    async fn select(&self, query: &str) -> Result<Vec<Row>> {
        debug!("Executing SPARQL query against {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .header(reqwest::header::ACCEPT, "application/sparql-results+json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NerError::Endpoint(format!(
                "endpoint returned status {status}: {body}"
            )));
        }

        let decoded: SelectResponse = response
            .json()
            .await
            .map_err(|e| NerError::MalformedResponse(format!("not SPARQL JSON results: {e}")))?;

        Ok(decoded.results.bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_decoding() {
        let raw = r#"{
            "head": { "vars": ["type"] },
            "results": { "bindings": [
                { "type": { "type": "uri", "value": "http://dbpedia.org/ontology/City" } }
            ] }
        }"#;
        let decoded: SelectResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(decoded.results.bindings.len(), 1);
        let term = &decoded.results.bindings[0]["type"];
        assert_eq!(term.term_type, "uri");
        assert_eq!(term.value, "http://dbpedia.org/ontology/City");
    }

    #[test]
    fn test_empty_results_decoding() {
        let raw = r#"{ "head": { "vars": ["type"] }, "results": { "bindings": [] } }"#;
        let decoded: SelectResponse = serde_json::from_str(raw).unwrap();
        assert!(decoded.results.bindings.is_empty());
    }
}
