//! Knowledge-graph type resolution
//!
//! Maps one candidate phrase to a knowledge-graph class by running the
//! type-lookup query against the configured graph. The outcome is tagged:
//! `Ok(Some(type))` for a match, `Ok(None)` when the query ran but matched
//! nothing, and `Err` when the query itself failed.

use crate::error::{NerError, Result};
use crate::query::{TypeQuery, TYPE_VAR};
use crate::sparql::SparqlTransport;
use std::sync::Arc;
use tracing::debug;

/// Resolves candidate phrases to knowledge-graph classes
pub struct TypeResolver {
    transport: Arc<dyn SparqlTransport>,
    graph: String,
}

impl TypeResolver {
    /// Create a resolver querying `graph` through the given transport
    pub fn new(transport: Arc<dyn SparqlTransport>, graph: impl Into<String>) -> Self {
        Self {
            transport,
            graph: graph.into(),
        }
    }

    /// Resolve the type of one candidate phrase
    ///
    /// Issues exactly one query; repeated phrases re-query (no caching).
    pub async fn resolve_type(&self, phrase: &str) -> Result<Option<String>> {
        let query = TypeQuery::new(&self.graph, phrase).build();
        debug!("Resolving type for \"{}\"", phrase);

        let rows = self.transport.select(&query).await?;
        let Some(row) = rows.into_iter().next() else {
            debug!("No type found for \"{}\"", phrase);
            return Ok(None);
        };

        let term = row.get(TYPE_VAR).ok_or_else(|| {
            NerError::MalformedResponse(format!("result row is missing ?{TYPE_VAR}"))
        })?;
        Ok(Some(term.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparql::{RdfTerm, Row};
    use async_trait::async_trait;

    struct OneRowTransport {
        row: Row,
    }

    #[async_trait]
    impl SparqlTransport for OneRowTransport {
        async fn select(&self, _query: &str) -> Result<Vec<Row>> {
            Ok(vec![self.row.clone()])
        }
    }

    struct EmptyTransport;

    #[async_trait]
    impl SparqlTransport for EmptyTransport {
        async fn select(&self, _query: &str) -> Result<Vec<Row>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_first_row_type_is_returned() {
        let mut row = Row::new();
        row.insert(
            TYPE_VAR.to_string(),
            RdfTerm {
                term_type: "uri".to_string(),
                value: "http://dbpedia.org/ontology/City".to_string(),
            },
        );
        let resolver = TypeResolver::new(Arc::new(OneRowTransport { row }), "http://dbpedia.org");
        let resolved = resolver.resolve_type("Paris").await.unwrap();
        assert_eq!(
            resolved.as_deref(),
            Some("http://dbpedia.org/ontology/City")
        );
    }

    #[tokio::test]
    async fn test_zero_rows_is_none_not_error() {
        let resolver = TypeResolver::new(Arc::new(EmptyTransport), "http://dbpedia.org");
        let resolved = resolver.resolve_type("Xyzzyqqq").await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_row_without_type_var_is_malformed() {
        let resolver = TypeResolver::new(
            Arc::new(OneRowTransport { row: Row::new() }),
            "http://dbpedia.org",
        );
        let result = resolver.resolve_type("Paris").await;
        assert!(matches!(result, Err(NerError::MalformedResponse(_))));
    }
}
