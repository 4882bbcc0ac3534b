//! Route pattern compilation and capture extraction.
//!
//! # Responsibilities
//! - Translate `:ident` path parameters into named regex groups
//! - Compile each pattern once, when the table is built
//! - Extract positional and named captures for a matching path
//!
//! # Design Decisions
//! - Matching is unanchored; a pattern anchors itself with `^` / `$`
//! - `:ident(body)` keeps `body` as the group's expression,
//!   bare `:ident` matches a single path segment
//! - `(?:...)`, flag groups, escaped colons and character classes
//!   are copied through untouched
//! - `\d` and `\w` are ASCII-only, so `/projects/١٢٣` is not a project id

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Expression used for a parameter without an explicit body.
const SEGMENT: &str = "[^/]+";

/// A compiled route pattern.
///
/// Keeps the pattern as written (for listing and export) next to the
/// compiled expression.
#[derive(Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

impl RoutePattern {
    /// Compile a pattern, expanding `:ident` parameters first.
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&ascii_classes(&expand_params(source)))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as written in the route definition.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The expression actually handed to the regex engine.
    pub fn expanded(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and collect its capture groups.
    pub fn captures(&self, path: &str) -> Option<Captures> {
        let caps = self.regex.captures(path)?;

        let positional = caps
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();

        let named = self
            .regex
            .capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect();

        Some(Captures { positional, named })
    }
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RoutePattern").field(&self.source).finish()
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RoutePattern {}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Capture groups of a successful match.
///
/// Index 0 is the whole match. Groups that did not participate in the
/// match are `None` positionally and absent from the named map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Captures {
    positional: Vec<Option<String>>,
    named: BTreeMap<String, String>,
}

impl Captures {
    /// Positional group `index`, if it participated in the match.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index)?.as_deref()
    }

    /// Named group `name`, if it participated in the match.
    pub fn name(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Number of positional groups, including the whole match.
    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// Named groups in name order.
    pub fn named(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Rewrite `:ident` parameters as named groups.
///
/// Unbalanced parameter bodies are copied through as-is so the regex
/// engine reports them.
pub fn expand_params(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len() + 16);
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            out.push(c);
            if let Some(&escaped) = chars.get(i + 1) {
                out.push(escaped);
            }
            i += 2;
            continue;
        }

        if in_class {
            if c == ']' {
                in_class = false;
            }
            out.push(c);
            i += 1;
            continue;
        }

        if c == '[' {
            in_class = true;
            out.push(c);
            i += 1;
            continue;
        }

        if c == ':' && is_param_start(&chars, i) {
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && is_ident_char(chars[end]) {
                end += 1;
            }
            let name: String = chars[start..end].iter().collect();

            out.push_str("(?P<");
            out.push_str(&name);
            out.push('>');

            match closing_paren(&chars, end) {
                Some(close) => {
                    out.extend(&chars[end + 1..close]);
                    out.push(')');
                    i = close + 1;
                }
                None => {
                    out.push_str(SEGMENT);
                    out.push(')');
                    i = end;
                }
            }
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// Rewrite `\d`, `\D`, `\w` and `\W` as explicit ASCII classes.
///
/// The regex engine treats these as Unicode classes. The rewritten
/// forms are bracketed, so they nest inside an enclosing class too.
pub fn ascii_classes(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len());
    let mut chars = expression.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(escaped) => {
                out.push('\\');
                out.push(escaped);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A colon opens a parameter unless it ends a `(?flags:` group opener.
fn is_param_start(chars: &[char], colon: usize) -> bool {
    let opens_ident = chars
        .get(colon + 1)
        .is_some_and(|c| c.is_ascii_alphabetic() || *c == '_');
    if !opens_ident {
        return false;
    }

    let mut j = colon;
    while j > 0 && (chars[j - 1].is_ascii_alphabetic() || chars[j - 1] == '-') {
        j -= 1;
    }
    !(j >= 2 && chars[j - 1] == '?' && chars[j - 2] == '(')
}

/// Index of the `)` closing the group opened at `open`, if `open` is `(`.
fn closing_paren(chars: &[char], open: usize) -> Option<usize> {
    if chars.get(open) != Some(&'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
