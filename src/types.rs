//! Core data types for the annotation pipeline
//!
//! This module defines the structures shared between the phrase extractor,
//! the type resolver, and the annotator: an annotation pairs one candidate
//! phrase with the knowledge-graph class resolved for it (if any), and an
//! annotation table collects the annotations for one sentence in extraction
//! order.

use serde::{Deserialize, Serialize};

/// One candidate phrase paired with its resolved knowledge-graph class
///
/// `entity_type` is `None` when the type lookup executed successfully but
/// matched no entity. A failed lookup is never represented here; it aborts
/// the annotation call instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Candidate phrase as extracted from the sentence
    pub phrase: String,

    /// Resolved class (typically a URI), absent when no type was found
    pub entity_type: Option<String>,
}

impl Annotation {
    /// Pair a phrase with a resolved type
    pub fn new(phrase: impl Into<String>, entity_type: Option<String>) -> Self {
        Self {
            phrase: phrase.into(),
            entity_type,
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.entity_type {
            Some(entity_type) => write!(f, "\"{}\" has type {}", self.phrase, entity_type),
            None => write!(f, "\"{}\" has no type", self.phrase),
        }
    }
}

/// Ordered annotations for one sentence
///
/// The public operation returns `Option<AnnotationTable>`: `None` means no
/// candidate phrases were found, which is distinct from a table whose entries
/// carry no type.
pub type AnnotationTable = Vec<Annotation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_display_with_type() {
        let ann = Annotation::new("Paris", Some("http://dbpedia.org/ontology/City".to_string()));
        assert_eq!(
            ann.to_string(),
            "\"Paris\" has type http://dbpedia.org/ontology/City"
        );
    }

    #[test]
    fn test_annotation_display_without_type() {
        // A missing type is always rendered explicitly, never left blank.
        let ann = Annotation::new("Xyzzyqqq", None);
        assert_eq!(ann.to_string(), "\"Xyzzyqqq\" has no type");
    }
}
