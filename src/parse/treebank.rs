//! Penn Treebank bracketed tree reader
//!
//! Reads trees in the bracketed notation emitted by most constituency
//! parsers, e.g. `(S (NP (DT The) (NN cat)) (VP (VBD sat)))`. Used both as a
//! standalone [`ConstituencyParser`] over pre-parsed input and as the decoder
//! for the CoreNLP client's `parse` annotation.

use crate::error::{NerError, Result};
use crate::parse::{ConstituencyParser, ParseTree};
use async_trait::async_trait;

/// Parser over pre-parsed Penn Treebank bracketed input
///
/// Each "sentence" handed to this parser must already be a bracketed tree.
/// Useful for tests, offline corpora, and piping in the output of an
/// external parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankParser;

#[async_trait]
impl ConstituencyParser for TreebankParser {
    async fn parse(&self, sentence: &str) -> Result<ParseTree> {
        read_tree(sentence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

fn lex(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut atom_start = None;
    for (i, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(start) = atom_start.take() {
                tokens.push(Token::Atom(&input[start..i]));
            }
            match c {
                '(' => tokens.push(Token::Open),
                ')' => tokens.push(Token::Close),
                _ => {}
            }
        } else if atom_start.is_none() {
            atom_start = Some(i);
        }
    }
    if let Some(start) = atom_start {
        tokens.push(Token::Atom(&input[start..]));
    }
    tokens
}

/// Read a single bracketed tree from `input`
///
/// Trailing non-whitespace input after the tree is an error, as is a
/// constituent with neither a token nor children.
pub fn read_tree(input: &str) -> Result<ParseTree> {
    let tokens = lex(input);
    if tokens.is_empty() {
        return Err(NerError::Parse("empty input".to_string()));
    }
    let mut pos = 0;
    let tree = read_node(&tokens, &mut pos)?;
    if pos != tokens.len() {
        return Err(NerError::Parse("trailing input after tree".to_string()));
    }
    Ok(tree)
}

fn read_node(tokens: &[Token<'_>], pos: &mut usize) -> Result<ParseTree> {
    expect(tokens, pos, Token::Open)?;

    let label = match tokens.get(*pos) {
        Some(Token::Atom(label)) => {
            *pos += 1;
            (*label).to_string()
        }
        _ => return Err(NerError::Parse("expected constituent label".to_string())),
    };

    let mut word = None;
    let mut children = Vec::new();
    loop {
        match tokens.get(*pos) {
            Some(Token::Close) => {
                *pos += 1;
                break;
            }
            Some(Token::Open) => {
                if word.is_some() {
                    return Err(NerError::Parse(format!(
                        "constituent '{label}' mixes a token with subtrees"
                    )));
                }
                children.push(read_node(tokens, pos)?);
            }
            Some(Token::Atom(atom)) => {
                if word.is_some() || !children.is_empty() {
                    return Err(NerError::Parse(format!(
                        "unexpected token '{atom}' in constituent '{label}'"
                    )));
                }
                word = Some((*atom).to_string());
                *pos += 1;
            }
            None => {
                return Err(NerError::Parse(format!(
                    "unbalanced brackets in constituent '{label}'"
                )))
            }
        }
    }

    if word.is_none() && children.is_empty() {
        return Err(NerError::Parse(format!("constituent '{label}' is empty")));
    }

    Ok(ParseTree {
        label,
        word,
        children,
    })
}

fn expect(tokens: &[Token<'_>], pos: &mut usize, wanted: Token<'_>) -> Result<()> {
    if tokens.get(*pos) == Some(&wanted) {
        *pos += 1;
        Ok(())
    } else {
        Err(NerError::Parse("unbalanced brackets".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_tree() {
        let tree = read_tree("(S (NP (DT The) (NN cat)) (VP (VBD sat)))").unwrap();
        assert_eq!(tree.label, "S");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.text(), "The cat sat");
    }

    #[test]
    fn test_read_root_wrapper() {
        // CoreNLP wraps its parses in a ROOT node; it reads like any other.
        let tree = read_tree("(ROOT (S (NP (PRP It)) (VP (VBD rained)) (. .)))").unwrap();
        assert_eq!(tree.label, "ROOT");
        assert_eq!(tree.text(), "It rained .");
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let compact = read_tree("(NP(DT the)(NN mat))").unwrap();
        let spaced = read_tree("( NP ( DT the )\n ( NN mat ) )").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_unbalanced_brackets_fail() {
        assert!(matches!(
            read_tree("(S (NP (NN cat)"),
            Err(NerError::Parse(_))
        ));
    }

    #[test]
    fn test_trailing_input_fails() {
        assert!(matches!(
            read_tree("(NN cat) (NN mat)"),
            Err(NerError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(read_tree("   "), Err(NerError::Parse(_))));
    }

    #[test]
    fn test_empty_constituent_fails() {
        assert!(matches!(read_tree("(NP)"), Err(NerError::Parse(_))));
    }

    #[tokio::test]
    async fn test_treebank_parser_trait_impl() {
        let parser = TreebankParser;
        let tree = parser.parse("(NP (NN cat))").await.unwrap();
        assert_eq!(tree.text(), "cat");
    }
}
