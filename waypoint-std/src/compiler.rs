//! Route compilation.
//!
//! Turns raw [`RouteEntry`] shorthand into canonical [`RouteDefinition`]s.
//! Compilation is total: malformed patterns produce empty or partial parts
//! instead of errors.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use waypoint_core::{Parts, RouteDefinition, RouteEntry, RouteSpec};

static OPTIONAL_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("optional group pattern"));
static NAMED_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\(\?)?:(?-u:\w)+").expect("named parameter pattern"));
static SPLAT_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(?-u:\w)+").expect("splat pattern"));

/// Compile a route entry into its canonical definition.
///
/// - `name` falls back to the pattern.
/// - `parts` are derived from the pattern unless given; a string is split on
///   `/` verbatim, a list is kept as is.
pub fn compile(entry: impl Into<RouteEntry>) -> RouteDefinition {
    let RouteSpec {
        is_default,
        route,
        name,
        parts,
    } = match entry.into() {
        RouteEntry::Pattern(route) => RouteSpec::new(route),
        RouteEntry::Detailed(spec) => spec,
    };

    let parts = match parts {
        None => derive_parts(&route),
        Some(Parts::Path(path)) => split_parts(&path),
        Some(Parts::List(parts)) => parts,
    };

    RouteDefinition {
        name: name.unwrap_or_else(|| route.clone()),
        route,
        parts,
        is_default,
    }
}

/// Remove every optional group, named parameter and splat from a pattern.
///
/// Parameter names are ASCII word characters; a name stops at the first other
/// character.
///
/// A `:` preceded by `(?` is kept; it belongs to a group marker, not a parameter.
pub fn strip_parameters(route: &str) -> String {
    let stripped = OPTIONAL_PARAM.replace_all(route, "");
    let stripped = NAMED_PARAM.replace_all(&stripped, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            String::new()
        }
    });
    SPLAT_PARAM.replace_all(&stripped, "").into_owned()
}

/// The static segments of a pattern, empty segments dropped.
pub fn derive_parts(route: &str) -> Vec<String> {
    strip_parameters(route)
        .split('/')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split caller-declared segments on `/`, keeping empty segments.
pub fn split_parts(path: &str) -> Vec<String> {
    path.split('/').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn test_shorthand_defaults() {
        let route = compile("bundle/edit/nuff/:id");

        assert_eq!(route.route, "bundle/edit/nuff/:id");
        assert_eq!(route.name, "bundle/edit/nuff/:id");
        assert_eq!(route.parts, strings(&["bundle", "edit", "nuff"]));
        assert!(!route.is_default);
    }

    #[test]
    fn test_named_parameter_stripped() {
        assert_eq!(compile("a/:id").parts, strings(&["a"]));
    }

    #[test]
    fn test_optional_group_removed_with_its_parameter() {
        assert_eq!(compile("a/(:b)/c").parts, strings(&["a", "c"]));
        assert_eq!(compile("docs(/:section)").parts, strings(&["docs"]));
    }

    #[test]
    fn test_splat_stripped() {
        assert_eq!(compile("a/*rest").parts, strings(&["a"]));
        assert_eq!(compile("*anything").parts, Vec::<String>::new());
    }

    #[test]
    fn test_string_parts_split_verbatim() {
        let route = compile(RouteSpec::new("a/:id").parts("x/y/z"));
        assert_eq!(route.parts, strings(&["x", "y", "z"]));

        let route = compile(RouteSpec::new("a/:id").parts("x//:y"));
        assert_eq!(route.parts, strings(&["x", "", ":y"]));
    }

    #[test]
    fn test_list_parts_kept() {
        let route = compile(RouteSpec::new("a/:id").parts(["p", "q"]));
        assert_eq!(route.parts, strings(&["p", "q"]));
    }

    #[test]
    fn test_detailed_entry_keeps_name_and_flag() {
        let route = compile(RouteSpec::new("home").named("homeRoute").default_route());
        assert_eq!(route.name, "homeRoute");
        assert!(route.is_default);
        assert_eq!(route.parts, strings(&["home"]));
    }

    #[test]
    fn test_group_marker_colon_survives() {
        assert_eq!(strip_parameters("a/(?:x)"), "a/");
        assert_eq!(strip_parameters("a(?:x/:id"), "a(?:x/");
    }

    #[test]
    fn test_parameter_names_are_ascii() {
        assert_eq!(compile("a/:ünï").parts, strings(&["a", ":ünï"]));
        assert_eq!(compile("a/:idé").parts, strings(&["a", "é"]));
        assert_eq!(compile("a/*ü").parts, strings(&["a", "*ü"]));
    }

    #[test]
    fn test_malformed_pattern_yields_partial_parts() {
        assert_eq!(compile("a/(:b/c").parts, strings(&["a", "(", "c"]));
        assert_eq!(compile("").parts, Vec::<String>::new());
    }
}
