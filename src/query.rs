//! SPARQL query construction
//!
//! Builds the type-lookup SELECT and centralizes literal escaping so phrase
//! text with quotes or backslashes can never produce malformed query syntax.

/// RDF Schema vocabulary prefix
pub const RDFS_PREFIX: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// OWL vocabulary prefix
pub const OWL_PREFIX: &str = "http://www.w3.org/2002/07/owl#";

/// The single result variable bound by [`TypeQuery`]
pub const TYPE_VAR: &str = "type";

/// Escape a string for embedding in a quoted SPARQL literal
///
/// Covers every character that can terminate or corrupt the literal: both
/// quote kinds (the phrase sits inside nested double and single quotes),
/// backslashes, and line breaks. Single pass, so the backslash introduced
/// for one character is never re-escaped.
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Type-lookup query for one candidate phrase
///
/// Finds entities whose label contains the phrase (full-text containment via
/// `bif:contains`), takes each entity's declared type, keeps only types that
/// are subclasses of a formal OWL class, and orders by label length so the
/// shortest (most precise) matching label wins. `LIMIT 1` leaves exactly one
/// row binding `?type`.
#[derive(Debug, Clone)]
pub struct TypeQuery<'a> {
    graph: &'a str,
    phrase: &'a str,
}

impl<'a> TypeQuery<'a> {
    /// Build a query against `graph` for the candidate `phrase`
    pub fn new(graph: &'a str, phrase: &'a str) -> Self {
        Self { graph, phrase }
    }

    /// Render the query string, escaping the phrase
    pub fn build(&self) -> String {
        let phrase = escape_literal(self.phrase);
        format!(
            "SELECT ?{TYPE_VAR} FROM <{graph}> WHERE {{ \
             ?entity <{rdfs}label> ?label . \
             ?entity a ?{TYPE_VAR} . \
             ?{TYPE_VAR} <{rdfs}subClassOf> ?superType . \
             ?superType a <{owl}Class> . \
             FILTER (<bif:contains>(?label, \"'{phrase}'\")) }} \
             ORDER BY strlen(?label) LIMIT 1",
            graph = self.graph,
            rdfs = RDFS_PREFIX,
            owl = OWL_PREFIX,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_literal("O'Brien's"), "O\\'Brien\\'s");
    }

    #[test]
    fn test_escape_backslash_before_quote() {
        // A raw backslash-quote pair must not collapse back into an
        // unescaped quote.
        assert_eq!(escape_literal(r"a\'b"), r"a\\\'b");
    }

    #[test]
    fn test_escape_double_quotes() {
        // The phrase sits inside a double-quoted literal, so an unescaped
        // double quote would terminate it early.
        assert_eq!(escape_literal(r#"say "hi" now"#), r#"say \"hi\" now"#);
    }

    #[test]
    fn test_escape_line_breaks() {
        assert_eq!(escape_literal("a\nb\rc"), r"a\nb\rc");
    }

    #[test]
    fn test_escape_leaves_plain_text_alone() {
        assert_eq!(escape_literal("Paris"), "Paris");
    }

    #[test]
    fn test_query_shape() {
        let query = TypeQuery::new("http://dbpedia.org", "Paris").build();
        assert!(query.starts_with("SELECT ?type FROM <http://dbpedia.org> WHERE"));
        assert!(query.contains("<bif:contains>(?label, \"'Paris'\")"));
        assert!(query.contains("?superType a <http://www.w3.org/2002/07/owl#Class>"));
        assert!(query.ends_with("ORDER BY strlen(?label) LIMIT 1"));
    }

    #[test]
    fn test_query_escapes_phrase() {
        let query = TypeQuery::new("http://dbpedia.org", "O'Brien's pub").build();
        assert!(query.contains(r"O\'Brien\'s pub"));
        assert!(!query.contains("\"'O'Brien"));
    }

    #[test]
    fn test_query_survives_double_quoted_phrase() {
        let query = TypeQuery::new("http://dbpedia.org", r#"say "hi" now"#).build();
        // The double-quoted literal must run unbroken to its closing quote.
        assert!(query.contains(r#"(?label, "'say \"hi\" now'")"#));
        assert!(!query.contains(r#""'say "hi"#));
    }
}
