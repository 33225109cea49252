//! In-process navigation engine.
//!
//! [`HistoryRouter`] is a reference [`Navigator`]: it compiles route patterns
//! into anchored regular expressions, matches location fragments against them
//! and runs the bound handler.
//!
//! # Matching
//!
//! Registrations are evaluated newest first. Captured parameters are passed
//! left to right, followed by the query string or a `None` sentinel when the
//! fragment has none. Empty captures are passed as `None`.
//!
//! Fragments are not percent-decoded.

use regex::Regex;
use tracing::trace;
use waypoint_core::{NavigationError, Navigator, RouteHandler, RoutingError};

struct Entry {
    pattern: String,
    name: String,
    matcher: Regex,
    handler: RouteHandler,
}

/// The result of matching a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Pattern of the matching registration.
    pub pattern: &'a str,
    /// Name of the matching registration.
    pub name: &'a str,
    /// Captured parameters, then the query string or a `None` sentinel.
    pub params: Vec<Option<String>>,
}

/// A regex-backed navigation engine.
#[derive(Default)]
pub struct HistoryRouter {
    // Highest priority first.
    entries: Vec<Entry>,
}

impl HistoryRouter {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(pattern, name)` of every registration, in evaluation order.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.pattern.as_str(), entry.name.as_str()))
    }

    /// Find the registration matching `fragment`.
    pub fn recognize(&self, fragment: &str) -> Option<RouteMatch<'_>> {
        self.find(normalize(fragment)).map(|(entry, params)| RouteMatch {
            pattern: &entry.pattern,
            name: &entry.name,
            params,
        })
    }

    /// Run the handler of the registration matching `fragment`.
    ///
    /// Returns `Ok(false)` when nothing matched.
    pub async fn navigate(&self, fragment: &str) -> Result<bool, NavigationError> {
        let fragment = normalize(fragment);
        let Some((entry, params)) = self.find(fragment) else {
            trace!(fragment, "no route matched");
            return Ok(false);
        };

        trace!(fragment, name = %entry.name, "route matched");
        (entry.handler)(params).await?;
        Ok(true)
    }

    fn find(&self, fragment: &str) -> Option<(&Entry, Vec<Option<String>>)> {
        self.entries.iter().find_map(|entry| {
            let captures = entry.matcher.captures(fragment)?;
            let params = captures
                .iter()
                .skip(1)
                .map(|capture| {
                    capture
                        .map(|m| m.as_str())
                        .filter(|value| !value.is_empty())
                        .map(str::to_string)
                })
                .collect();
            Some((entry, params))
        })
    }
}

impl Navigator for HistoryRouter {
    fn route(
        &mut self,
        pattern: &str,
        name: &str,
        handler: RouteHandler,
    ) -> Result<(), RoutingError> {
        let matcher = pattern_to_regex(pattern)?;
        self.entries.insert(
            0,
            Entry {
                pattern: pattern.to_string(),
                name: name.to_string(),
                matcher,
                handler,
            },
        );
        Ok(())
    }
}

/// Compile a route pattern into an anchored matcher.
///
/// `(…)` becomes an optional group, `:name` one segment, `*name` any
/// remaining path; everything else matches literally. A trailing `?query`
/// is captured as the last group.
pub fn pattern_to_regex(pattern: &str) -> Result<Regex, RoutingError> {
    let mut source = String::from("^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' => source.push_str("(?:"),
            ')' => source.push_str(")?"),
            ':' | '*' if chars.peek().copied().is_some_and(is_word) => {
                while chars.peek().copied().is_some_and(is_word) {
                    chars.next();
                }
                source.push_str(if c == ':' { "([^/?]+)" } else { "([^?]*?)" });
            }
            _ => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push_str(r"(?:\?([\s\S]*))?$");

    Regex::new(&source).map_err(|err| RoutingError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

// Parameter names are ASCII only.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Strip one leading `#` or `/` and trailing whitespace.
fn normalize(fragment: &str) -> &str {
    let fragment = fragment.trim_end();
    fragment.strip_prefix(['#', '/']).unwrap_or(fragment)
}
