//! dbpedia-ner - Knowledge-Graph-Backed Named-Entity Annotation
//!
//! A lightweight named-entity recognizer that substitutes a constituency
//! parse heuristic plus a knowledge-base lookup for a trained classifier:
//! - Base noun phrase candidates extracted via tree pattern matching
//! - Candidate types resolved against a remote SPARQL endpoint (DBpedia by
//!   default), preferring the shortest matching entity label
//! - Trait seams for the parser and the query transport, so both external
//!   collaborators can be substituted
//!
//! # Architecture
//!
//! - **Parse**: `ParseTree` plus the `ConstituencyParser` seam and two
//!   implementations (Penn Treebank reader, CoreNLP HTTP client)
//! - **Pattern**: a tregex-subset tree pattern matcher
//! - **Extract**: base NP candidate extraction
//! - **Query/Sparql/Resolver**: query construction, the transport seam,
//!   and per-phrase type resolution
//! - **Annotator**: the public per-sentence entry point
//!
//! # Example
//!
//! ```ignore
//! use dbpedia_ner::{Annotator, NerConfig, TreebankParser};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = NerConfig::from_env()?;
//!     let annotator = Annotator::with_http(&config, Arc::new(TreebankParser))?;
//!
//!     let table = annotator
//!         .annotation_table("(S (NP (NNP Paris)) (VP (VBZ gleams)))")
//!         .await?;
//!     match table {
//!         Some(annotations) => annotations.iter().for_each(|a| println!("{a}")),
//!         None => println!("No base noun phrases were found."),
//!     }
//!     Ok(())
//! }
//! ```

pub mod annotator;
pub mod config;
pub mod error;
pub mod extract;
pub mod parse;
pub mod pattern;
pub mod query;
pub mod resolver;
pub mod sparql;
pub mod types;

// Re-export commonly used types
pub use annotator::Annotator;
pub use config::NerConfig;
pub use error::{NerError, Result};
pub use extract::PhraseExtractor;
pub use parse::{ConstituencyParser, CoreNlpParser, ParseTree, TreebankParser};
pub use pattern::TreePattern;
pub use resolver::TypeResolver;
pub use sparql::{HttpTransport, RdfTerm, Row, SparqlTransport};
pub use types::{Annotation, AnnotationTable};
