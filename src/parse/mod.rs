//! Parse trees and the constituency parser seam
//!
//! The annotation pipeline never parses sentences itself: it depends on the
//! [`ConstituencyParser`] trait and reads the resulting [`ParseTree`] only
//! through pattern matching and leaf enumeration. Any conformant parser can
//! be plugged in; this crate ships two:
//! - [`TreebankParser`]: reads pre-parsed Penn Treebank bracketed trees
//! - [`CoreNlpParser`]: queries a CoreNLP-style HTTP parse server

pub mod corenlp;
pub mod treebank;

pub use corenlp::CoreNlpParser;
pub use treebank::TreebankParser;

use crate::error::Result;
use async_trait::async_trait;

/// A node in a constituency parse tree
///
/// Interior nodes carry a syntactic category label (`S`, `NP`, `VP`, ...);
/// leaves additionally carry the surface token. The pipeline treats trees as
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    /// Syntactic category label
    pub label: String,

    /// Surface token, present at leaves only
    pub word: Option<String>,

    /// Child constituents, empty at leaves
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    /// Create an interior node
    pub fn node(label: impl Into<String>, children: Vec<ParseTree>) -> Self {
        Self {
            label: label.into(),
            word: None,
            children,
        }
    }

    /// Create a leaf carrying a surface token
    pub fn leaf(label: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            word: Some(word.into()),
            children: Vec::new(),
        }
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Surface tokens of this constituent in document order
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'t>(&'t self, out: &mut Vec<&'t str>) {
        if let Some(word) = &self.word {
            out.push(word.as_str());
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// Surface text of this constituent: leaf tokens joined by single spaces
    pub fn text(&self) -> String {
        self.leaves().join(" ")
    }
}

/// Capability interface for external constituency parsers
///
/// Implementations must be safe to share across calls; the annotator holds
/// one parser for its whole lifetime and never re-creates it per sentence.
#[async_trait]
pub trait ConstituencyParser: Send + Sync {
    /// Parse one sentence into a constituency tree
    ///
    /// A sentence the parser cannot handle is a [`crate::NerError::Parse`]
    /// error, never an empty tree.
    async fn parse(&self, sentence: &str) -> Result<ParseTree>;
}
