//! Landing page component template model.

use serde::Serialize;
use serde_json::Value;

/// A reusable landing page building block registered with the service.
///
/// The `config` payload is opaque to the seeder: it is whatever shape the
/// rendering side expects for that component type, and it is transmitted
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentTemplate {
    /// Display label shown in the page editor.
    pub name: String,
    /// Machine identifier, unique within the catalog by convention only.
    #[serde(rename = "type")]
    pub kind: String,
    /// Presentation settings for the rendering service.
    pub config: Value,
    /// Preview image reference; none of the built-ins carry one.
    pub preview_image: Option<String>,
    /// Built-in templates are platform-owned and not user-deletable.
    pub is_system: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_field_names() {
        let template = ComponentTemplate {
            name: "Copyright Notice".to_string(),
            kind: "copyright".to_string(),
            config: json!({ "showYear": true }),
            preview_image: None,
            is_system: true,
        };

        let body = serde_json::to_value(&template).unwrap();
        assert_eq!(body["type"], "copyright");
        assert_eq!(body["preview_image"], Value::Null);
        assert_eq!(body["is_system"], json!(true));
        assert!(body.get("kind").is_none());
    }

    #[test]
    fn serialization_preserves_config_key_order() {
        let template = ComponentTemplate {
            name: "Footer Section".to_string(),
            kind: "footer".to_string(),
            config: json!({ "zeta": 1, "alpha": 2, "mid": { "b": 1, "a": 2 } }),
            preview_image: None,
            is_system: true,
        };

        let body = serde_json::to_string(&template).unwrap();
        let config_at = body.find("\"config\"").unwrap();
        let zeta_at = body.find("\"zeta\"").unwrap();
        let alpha_at = body.find("\"alpha\"").unwrap();
        assert!(config_at < zeta_at && zeta_at < alpha_at, "insertion order must survive serialization");
    }
}
