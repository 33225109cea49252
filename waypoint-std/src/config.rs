//! Route configuration documents.
//!
//! Configurations can be written in JSON, as an array of groups:
//!
//! ```json
//! [
//!   { "controller": "screens/home",  "routes": [{ "route": "home", "isDefault": true }] },
//!   { "controller": "screens/items", "routes": ["items", "items/:id"] }
//! ]
//! ```
//!
//! or in TOML, as an array of `group` tables:
//!
//! ```toml
//! [[group]]
//! controller = "screens/home"
//! routes = [{ route = "home", isDefault = true }]
//!
//! [[group]]
//! controller = "screens/items"
//! routes = ["items", "items/:id"]
//! ```
//!
//! Controllers loaded from a document are always identifiers and need a
//! resolver. Parsing only checks shape; validation happens when the router
//! is built.

use serde::Deserialize;
use std::{fs, path::Path};
use waypoint_core::{ConfigError, RouteConfigGroup};

#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    group: Vec<RouteConfigGroup>,
}

/// Parse a JSON configuration. `null` and `[]` are rejected as empty.
pub fn from_json(source: &str) -> Result<Vec<RouteConfigGroup>, ConfigError> {
    let configs: Option<Vec<RouteConfigGroup>> =
        serde_json::from_str(source).map_err(|err| ConfigError::Parse {
            format: "json",
            message: err.to_string(),
        })?;
    non_empty(configs.unwrap_or_default())
}

/// Parse a TOML configuration.
pub fn from_toml(source: &str) -> Result<Vec<RouteConfigGroup>, ConfigError> {
    let document: TomlDocument = toml::from_str(source).map_err(|err| ConfigError::Parse {
        format: "toml",
        message: err.to_string(),
    })?;
    non_empty(document.group)
}

/// Read a configuration file, choosing the format from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<RouteConfigGroup>, ConfigError> {
    let path = path.as_ref();
    let parse = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json,
        Some("toml") => from_toml,
        other => {
            return Err(ConfigError::Parse {
                format: "unknown",
                message: format!(
                    "unsupported config extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                ),
            });
        }
    };

    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&source)
}

fn non_empty(configs: Vec<RouteConfigGroup>) -> Result<Vec<RouteConfigGroup>, ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::Empty);
    }
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::{ControllerStage, RouteEntry, RouteSpec};

    #[test]
    fn test_json_groups() {
        let configs = from_json(
            r#"[
                { "controller": "screens/home", "routes": [{ "route": "home", "isDefault": true }] },
                { "controller": "screens/items", "routes": ["items", { "route": "items/:id", "name": "item", "parts": "items/detail" }] }
            ]"#,
        )
        .unwrap();

        assert_eq!(configs.len(), 2);
        let controller = configs[0].controller.as_ref().unwrap();
        assert_eq!(controller.as_identifier(), Some("screens/home"));
        assert_eq!(controller.stage(), ControllerStage::Unresolved);

        let routes = configs[1].routes.as_ref().unwrap();
        assert_eq!(routes[0], RouteEntry::from("items"));
        assert_eq!(
            routes[1],
            RouteEntry::from(RouteSpec::new("items/:id").named("item").parts("items/detail"))
        );
    }

    #[test]
    fn test_json_missing_fields_survive_parsing() {
        let configs = from_json(r#"[{ "routes": ["home"] }]"#).unwrap();
        assert!(configs[0].controller.is_none());
    }

    #[test]
    fn test_json_empty_and_null() {
        assert!(matches!(from_json("null"), Err(ConfigError::Empty)));
        assert!(matches!(from_json("[]"), Err(ConfigError::Empty)));
    }

    #[test]
    fn test_json_syntax_error() {
        let err = from_json("[{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "json", .. }));
    }

    #[test]
    fn test_toml_groups() {
        let configs = from_toml(
            r#"
            [[group]]
            controller = "screens/home"
            routes = [{ route = "home", isDefault = true }]

            [[group]]
            controller = "screens/items"
            routes = ["items", "items/:id"]
            "#,
        )
        .unwrap();

        assert_eq!(configs.len(), 2);
        let routes = configs[0].routes.as_ref().unwrap();
        assert_eq!(
            routes[0],
            RouteEntry::from(RouteSpec::new("home").default_route())
        );
        assert_eq!(configs[1].routes.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_toml_without_groups() {
        assert!(matches!(from_toml(""), Err(ConfigError::Empty)));
    }

    #[test]
    fn test_load_by_extension() {
        let path = std::env::temp_dir().join(format!("waypoint-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            "[[group]]\ncontroller = \"screens/home\"\nroutes = [\"home\"]\n",
        )
        .unwrap();

        let configs = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(configs.len(), 1);
    }

    #[test]
    fn test_load_errors() {
        let missing = std::env::temp_dir().join("waypoint-config-missing.json");
        assert!(matches!(load(&missing), Err(ConfigError::Io { .. })));

        let err = load("routes.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "unknown", .. }));
    }
}
