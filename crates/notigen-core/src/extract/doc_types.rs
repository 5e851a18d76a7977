//! `@param` doc-type scanner.

use once_cell::sync::Lazy;
use regex::Regex;

/// One `@param <expr> $<name>` association, in source order.
///
/// The expression may be a `|` union, carry `[]` array markers, or be a
/// `\`-qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub name: String,
    pub type_expr: String,
}

static PARAM_DOC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@param\s+([A-Za-z0-9_\\\[\]|]+)\s+\$(\w+)").unwrap());

/// Scans doc blocks for parameter type documentation.
pub struct DocTypeScanner;

impl DocTypeScanner {
    /// Return every `@param` association in source order, duplicates
    /// included. The import resolver walks all of them; the per-field view
    /// built by [`first_per_name`](Self::first_per_name) keeps only the
    /// first association per field name.
    pub fn scan(source: &str) -> Vec<ParamDoc> {
        PARAM_DOC_REGEX
            .captures_iter(source)
            .map(|cap| ParamDoc {
                name: cap[2].to_string(),
                type_expr: cap[1].to_string(),
            })
            .collect()
    }

    /// First documented type expression per field name.
    pub fn first_per_name(docs: &[ParamDoc]) -> Vec<(&str, &str)> {
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for doc in docs {
            if !seen.iter().any(|(name, _)| *name == doc.name) {
                seen.push((doc.name.as_str(), doc.type_expr.as_str()));
            }
        }
        seen
    }
}
