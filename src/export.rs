use std::path::Path;

use serde_json::json;

use crate::HppError;
use crate::ast::ClassNode;
use crate::config::HppConfig;

/// Export a parsed class tree to JSON.
///
/// Variables export as an array of `{"name", "value"}` entries and
/// classes as a nested array, so source order survives the round trip
/// into tooling that reads the dump.
///
/// # Examples
/// ```no_run
/// use hpp_cfg::{HppConfig, export};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HppConfig::from_file("treatment.hpp")?;
/// let json = export::class_to_json(config.root())?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
pub fn class_to_json(node: &ClassNode) -> Result<String, HppError> {
    Ok(serde_json::to_string_pretty(&node_to_json(node)).unwrap())
}

/// Read, parse, and export a config file in one call.
///
/// # Errors
/// Returns an error if the file can't be read or contains malformed
/// class syntax.
pub fn export_hpp_file<P: AsRef<Path>>(path: P) -> Result<String, HppError> {
    let config = HppConfig::from_file(path)?;
    class_to_json(config.root())
}

fn node_to_json(node: &ClassNode) -> serde_json::Value {
    let variables: Vec<serde_json::Value> = node
        .variables
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();
    let classes: Vec<serde_json::Value> = node.classes.iter().map(node_to_json).collect();

    json!({
        "name": node.name,
        "variables": variables,
        "classes": classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_nests_classes_and_keeps_variable_order() {
        let config = HppConfig::from_str(
            r#"
            class Addon {
                class Bandaging {
                    displayName = "Bandage";
                    treatmentTime = 5;
                    class BasicBandage {
                        effectiveness = 0.6;
                    };
                };
            };
            "#,
        )
        .expect("Failed to parse");

        let json_output = class_to_json(config.root()).expect("Failed to export");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["name"], "");
        assert_eq!(v["classes"][0]["name"], "Bandaging");
        assert_eq!(v["classes"][0]["variables"][0]["name"], "displayName");
        assert_eq!(v["classes"][0]["variables"][0]["value"], "Bandage");
        assert_eq!(v["classes"][0]["variables"][1]["name"], "treatmentTime");
        assert_eq!(v["classes"][0]["variables"][1]["value"], 5.0);
        assert_eq!(v["classes"][0]["classes"][0]["name"], "BasicBandage");
        assert_eq!(
            v["classes"][0]["classes"][0]["variables"][0]["value"],
            0.6
        );
    }

    #[test]
    fn test_export_array_values() {
        let config = HppConfig::from_str(
            r#"class Addon { class Tourniquet { reopeningChance[] = {0.1, 0.2, "high"}; }; };"#,
        )
        .expect("Failed to parse");

        let json_output = class_to_json(config.root()).expect("Failed to export");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        let value = &v["classes"][0]["variables"][0]["value"];
        assert_eq!(value[0], 0.1);
        assert_eq!(value[1], 0.2);
        assert_eq!(value[2], "high");
    }
}
