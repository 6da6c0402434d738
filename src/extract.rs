//! Base noun phrase extraction
//!
//! A base NP is an innermost noun phrase: an `NP` node with no `NP` ancestor
//! that is not reducible to a single determiner or pronoun leaf. Candidates
//! are the surface text of each matching NP, in document order, with
//! duplicates skipped.

use crate::error::{NerError, Result};
use crate::parse::{ConstituencyParser, ParseTree};
use crate::pattern::TreePattern;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// NP nodes that are not a lone determiner/pronoun and have no NP ancestor
const BASE_NP_PATTERN: &str = "NP !<: /DT|PRP.?/ !>> NP";

/// Leaf categories that carry no semantic content on their own
const FUNCTION_WORD_LABELS: &str = r"^(?:DT|PRP.?)$";

/// Extracts base noun phrase candidates from sentences
pub struct PhraseExtractor {
    parser: Arc<dyn ConstituencyParser>,
    pattern: TreePattern,
    function_word: Regex,
}

impl PhraseExtractor {
    /// Create an extractor over the given parser
    pub fn new(parser: Arc<dyn ConstituencyParser>) -> Result<Self> {
        Ok(Self {
            parser,
            pattern: TreePattern::compile(BASE_NP_PATTERN)?,
            function_word: Regex::new(FUNCTION_WORD_LABELS)
                .map_err(|e| NerError::Pattern(e.to_string()))?,
        })
    }

    /// Extract the base NP candidate phrases of one sentence
    ///
    /// Returns `Ok(None)` when the sentence contains no qualifying noun
    /// phrase. A parse failure propagates; it is never reported as an empty
    /// candidate list.
    pub async fn extract_base_nps(&self, sentence: &str) -> Result<Option<Vec<String>>> {
        let tree = self.parser.parse(sentence).await?;

        let mut phrases: Vec<String> = Vec::new();
        for np in self.pattern.matches(&tree) {
            // the lone-child test in the pattern misses unary chains like
            // (NP (NP (PRP It))), so re-check the whole constituent
            if self.reduces_to_function_word(np) {
                continue;
            }
            let phrase = np.text();
            if phrase.is_empty() {
                continue;
            }
            // distinct NPs can share the same surface text
            if !phrases.iter().any(|existing| existing == &phrase) {
                phrases.push(phrase);
            }
        }

        debug!("Extracted {} candidate phrase(s)", phrases.len());
        if phrases.is_empty() {
            Ok(None)
        } else {
            Ok(Some(phrases))
        }
    }

    /// Whether a constituent is nothing but a determiner/pronoun leaf,
    /// possibly wrapped in a chain of single-child nodes
    fn reduces_to_function_word(&self, np: &ParseTree) -> bool {
        let mut node = np;
        loop {
            match node.children.as_slice() {
                [] => return node.word.is_some() && self.function_word.is_match(&node.label),
                [only] => node = only,
                _ => return false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::TreebankParser;

    fn extractor() -> PhraseExtractor {
        PhraseExtractor::new(Arc::new(TreebankParser)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_base_nps_in_order() {
        let candidates = extractor()
            .extract_base_nps(
                "(ROOT (S (NP (DT The) (NN cat)) \
                 (VP (VBD sat) (PP (IN on) (NP (DT the) (NN mat)))) (. .)))",
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(candidates, vec!["The cat".to_string(), "the mat".to_string()]);
    }

    #[tokio::test]
    async fn test_pronoun_only_np_yields_none() {
        let result = extractor()
            .extract_base_nps("(ROOT (S (NP (PRP It)) (VP (VBD rained)) (. .)))")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_pronoun_in_unary_np_chain_yields_none() {
        // The wrapping NP's only child is another NP, so the pattern's
        // lone-child test alone would let the bare pronoun through.
        let result = extractor()
            .extract_base_nps("(ROOT (S (NP (NP (PRP It))) (VP (VBD rained)) (. .)))")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_determiner_in_unary_np_chain_yields_none() {
        let result = extractor()
            .extract_base_nps("(S (NP (NP (DT that))) (VP (VBZ suffices)))")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_nested_nps_are_excluded() {
        let candidates = extractor()
            .extract_base_nps("(S (NP (NP (NN dog)) (PP (IN of) (NP (NN war)))))")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(candidates, vec!["dog of war".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicate_phrases_collapse() {
        let candidates = extractor()
            .extract_base_nps("(S (NP (NN cat)) (VP (VBD saw) (NP (NN cat))))")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(candidates, vec!["cat".to_string()]);
    }

    #[tokio::test]
    async fn test_parse_failure_propagates() {
        let result = extractor().extract_base_nps("not a bracketed tree").await;
        assert!(result.is_err());
    }
}
