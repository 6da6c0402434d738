//! Sentence annotation orchestrator
//!
//! Combines the phrase extractor and the type resolver into the public
//! entry point: one sentence in, an ordered table of (phrase, type) pairs
//! out. Stateless per call; the parser and transport are shared, read-only
//! resources constructed once.

use crate::config::NerConfig;
use crate::error::Result;
use crate::extract::PhraseExtractor;
use crate::parse::ConstituencyParser;
use crate::resolver::TypeResolver;
use crate::sparql::{HttpTransport, SparqlTransport};
use crate::types::{Annotation, AnnotationTable};
use std::sync::Arc;
use tracing::debug;

/// Annotates sentences with knowledge-graph entity types
pub struct Annotator {
    extractor: PhraseExtractor,
    resolver: TypeResolver,
}

impl Annotator {
    /// Create an annotator from a parser and a SPARQL transport
    pub fn new(
        parser: Arc<dyn ConstituencyParser>,
        transport: Arc<dyn SparqlTransport>,
        graph: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            extractor: PhraseExtractor::new(parser)?,
            resolver: TypeResolver::new(transport, graph),
        })
    }

    /// Create an annotator querying the configured endpoint over HTTP
    pub fn with_http(config: &NerConfig, parser: Arc<dyn ConstituencyParser>) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config.endpoint.clone()));
        Self::new(parser, transport, config.graph.as_str())
    }

    /// Annotate one sentence
    ///
    /// Returns `Ok(None)` when no candidate phrases were found; the resolver
    /// is never invoked in that case. Otherwise each candidate is resolved
    /// exactly once, in extraction order, and the table mirrors that order.
    /// A resolution failure aborts the whole call rather than masquerading
    /// as a missing type.
    pub async fn annotation_table(&self, sentence: &str) -> Result<Option<AnnotationTable>> {
        let Some(phrases) = self.extractor.extract_base_nps(sentence).await? else {
            debug!("No candidate phrases; skipping type resolution");
            return Ok(None);
        };

        let mut table = AnnotationTable::with_capacity(phrases.len());
        for phrase in phrases {
            let entity_type = self.resolver.resolve_type(&phrase).await?;
            table.push(Annotation { phrase, entity_type });
        }
        Ok(Some(table))
    }
}
