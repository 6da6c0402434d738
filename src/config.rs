//! Endpoint and graph configuration
//!
//! Resolution order, highest priority first:
//! 1. CLI flags (handled by clap in the binary)
//! 2. Environment variables (`DBPEDIA_NER_ENDPOINT`, `DBPEDIA_NER_GRAPH`,
//!    `DBPEDIA_NER_PARSER_URL`)
//! 3. Built-in DBpedia defaults
//!
//! Both URIs are validated at construction; endpoint liveness is only
//! observed at first query time.

use crate::error::{NerError, Result};
use std::env;
use url::Url;

/// Default public DBpedia SPARQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dbpedia.org/sparql";

/// Default graph IRI served by that endpoint
pub const DEFAULT_GRAPH: &str = "http://dbpedia.org";

/// Environment variable overriding the SPARQL endpoint
pub const ENDPOINT_ENV: &str = "DBPEDIA_NER_ENDPOINT";

/// Environment variable overriding the graph IRI
pub const GRAPH_ENV: &str = "DBPEDIA_NER_GRAPH";

/// Environment variable naming an HTTP parse server
pub const PARSER_URL_ENV: &str = "DBPEDIA_NER_PARSER_URL";

/// Immutable annotation configuration
#[derive(Debug, Clone)]
pub struct NerConfig {
    /// SPARQL endpoint address
    pub endpoint: Url,

    /// IRI of the graph to query, kept verbatim: graph IRIs are compared
    /// byte-for-byte by SPARQL stores, so URL normalization (e.g. a trailing
    /// slash on a host-only IRI) would silently name a different graph
    pub graph: String,

    /// Optional HTTP parse server address
    pub parser_url: Option<Url>,
}

impl NerConfig {
    /// Build a configuration from endpoint and graph URIs
    pub fn new(endpoint: &str, graph: &str) -> Result<Self> {
        parse_uri("graph IRI", graph)?;
        Ok(Self {
            endpoint: parse_uri("SPARQL endpoint", endpoint)?,
            graph: graph.to_string(),
            parser_url: None,
        })
    }

    /// Set the parse server address
    pub fn with_parser_url(mut self, parser_url: &str) -> Result<Self> {
        self.parser_url = Some(parse_uri("parser URL", parser_url)?);
        Ok(self)
    }

    /// Build a configuration from the environment, falling back to the
    /// DBpedia defaults
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let graph = env::var(GRAPH_ENV).unwrap_or_else(|_| DEFAULT_GRAPH.to_string());
        let config = Self::new(&endpoint, &graph)?;
        match env::var(PARSER_URL_ENV) {
            Ok(parser_url) => config.with_parser_url(&parser_url),
            Err(_) => Ok(config),
        }
    }
}

impl Default for NerConfig {
    fn default() -> Self {
        // The built-in URIs are statically known to be valid.
        Self::new(DEFAULT_ENDPOINT, DEFAULT_GRAPH).unwrap()
    }
}

fn parse_uri(what: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| NerError::Config(format!("invalid {what} '{raw}': {e}")))
}
