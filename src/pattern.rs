//! Tree pattern matching over constituency parse trees
//!
//! Implements the small tregex subset the phrase extractor needs: a target
//! label plus negated structural constraints. Supported operators:
//! - `!<:` — the node must not have exactly one child matching the label
//! - `!>`  — the node's parent must not match the label
//! - `!>>` — no ancestor of the node may match the label
//!
//! Labels are written either bare (`NP`, exact match) or as `/regex/`
//! (anchored to the whole label, so `/DT|PRP.?/` matches `DT`, `PRP`, and
//! `PRP$` but not `ADVP`). Matching traverses the tree top-down and
//! left-to-right, so bindings come back in document order.

use crate::error::{NerError, Result};
use crate::parse::ParseTree;
use regex::Regex;

/// Label test: an exact category name or an anchored regex
#[derive(Debug, Clone)]
enum LabelMatcher {
    Exact(String),
    Pattern(Regex),
}

impl LabelMatcher {
    fn compile(spec: &str) -> Result<Self> {
        if let Some(body) = spec.strip_prefix('/').and_then(|s| s.strip_suffix('/')) {
            let anchored = format!("^(?:{body})$");
            let regex = Regex::new(&anchored)
                .map_err(|e| NerError::Pattern(format!("bad label regex '{spec}': {e}")))?;
            Ok(LabelMatcher::Pattern(regex))
        } else if spec.is_empty() {
            Err(NerError::Pattern("empty label".to_string()))
        } else {
            Ok(LabelMatcher::Exact(spec.to_string()))
        }
    }

    fn matches(&self, label: &str) -> bool {
        match self {
            LabelMatcher::Exact(expected) => expected == label,
            LabelMatcher::Pattern(regex) => regex.is_match(label),
        }
    }
}

/// Negated structural constraint on a candidate node
#[derive(Debug, Clone)]
enum Constraint {
    /// `!<:` — not "has exactly one child matching"
    NotOnlyChild(LabelMatcher),
    /// `!>` — parent does not match
    NotParent(LabelMatcher),
    /// `!>>` — no ancestor matches
    NotAncestor(LabelMatcher),
}

/// A compiled tree pattern
///
/// Compile once, match many times; compilation validates the operator
/// sequence and any label regexes up front.
#[derive(Debug, Clone)]
pub struct TreePattern {
    target: LabelMatcher,
    constraints: Vec<Constraint>,
}

impl TreePattern {
    /// Compile a pattern specification such as `NP !<: /DT|PRP.?/ !>> NP`
    pub fn compile(spec: &str) -> Result<Self> {
        let mut parts = spec.split_whitespace();
        let target = LabelMatcher::compile(
            parts
                .next()
                .ok_or_else(|| NerError::Pattern("empty pattern".to_string()))?,
        )?;

        let mut constraints = Vec::new();
        while let Some(op) = parts.next() {
            let label = parts.next().ok_or_else(|| {
                NerError::Pattern(format!("operator '{op}' is missing its label"))
            })?;
            let matcher = LabelMatcher::compile(label)?;
            let constraint = match op {
                "!<:" => Constraint::NotOnlyChild(matcher),
                "!>" => Constraint::NotParent(matcher),
                "!>>" => Constraint::NotAncestor(matcher),
                other => {
                    return Err(NerError::Pattern(format!(
                        "unsupported operator '{other}'"
                    )))
                }
            };
            constraints.push(constraint);
        }

        Ok(Self {
            target,
            constraints,
        })
    }

    /// All nodes matching the pattern, in left-to-right document order
    pub fn matches<'t>(&self, tree: &'t ParseTree) -> Vec<&'t ParseTree> {
        let mut found = Vec::new();
        let mut ancestors: Vec<&str> = Vec::new();
        self.walk(tree, &mut ancestors, &mut found);
        found
    }

    fn walk<'t>(
        &self,
        node: &'t ParseTree,
        ancestors: &mut Vec<&'t str>,
        found: &mut Vec<&'t ParseTree>,
    ) {
        if self.node_matches(node, ancestors) {
            found.push(node);
        }
        ancestors.push(node.label.as_str());
        for child in &node.children {
            self.walk(child, ancestors, found);
        }
        ancestors.pop();
    }

    fn node_matches(&self, node: &ParseTree, ancestors: &[&str]) -> bool {
        if !self.target.matches(&node.label) {
            return false;
        }
        self.constraints.iter().all(|constraint| match constraint {
            Constraint::NotOnlyChild(m) => {
                !(node.children.len() == 1 && m.matches(&node.children[0].label))
            }
            Constraint::NotParent(m) => !ancestors.last().is_some_and(|label| m.matches(label)),
            Constraint::NotAncestor(m) => !ancestors.iter().any(|label| m.matches(label)),
        })
    }
}
