//! Connector types.

use serde::{Deserialize, Serialize};

use super::number::optional_decimal;

/// A physical charging port at a station.
///
/// Connectors only arrive as part of a station detail response and are not
/// kept once the detail overlay is replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub connector_type: String,

    pub current_type: String,

    #[serde(default, deserialize_with = "optional_decimal")]
    pub power_kw: Option<f64>,

    /// Free-text status as reported by the operator.
    pub status: String,

    pub count_available: i32,

    pub count_total: i32,
}

impl Connector {
    /// Whether at least one port of this type is free.
    pub fn is_available(&self) -> bool {
        self.count_available > 0
    }
}

/// A connector type known to the API.
///
/// The types endpoint has returned both bare names and `{id, name,
/// description}` records; both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConnectorTypeRepr")]
pub struct ConnectorType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConnectorTypeRepr {
    Name(String),
    Record {
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<ConnectorTypeRepr> for ConnectorType {
    fn from(repr: ConnectorTypeRepr) -> Self {
        match repr {
            ConnectorTypeRepr::Name(name) => Self {
                name,
                description: None,
            },
            ConnectorTypeRepr::Record { name, description } => Self { name, description },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(available: i32, total: i32) -> Connector {
        Connector {
            connector_type: "CCS".into(),
            current_type: "DC".into(),
            power_kw: Some(50.0),
            status: "operational".into(),
            count_available: available,
            count_total: total,
        }
    }

    #[test]
    fn availability_follows_count() {
        assert!(!connector(0, 2).is_available());
        assert!(connector(3, 4).is_available());
    }

    #[test]
    fn connector_type_from_name() {
        let types: Vec<ConnectorType> = serde_json::from_str(r#"["Type 2", "CHAdeMO"]"#).unwrap();
        assert_eq!(types[0].name, "Type 2");
        assert_eq!(types[1].description, None);
    }

    #[test]
    fn connector_type_from_record() {
        let types: Vec<ConnectorType> = serde_json::from_str(
            r#"[{"id": 1, "name": "CCS", "description": "Combined Charging System"}]"#,
        )
        .unwrap();
        assert_eq!(types[0].name, "CCS");
        assert_eq!(
            types[0].description.as_deref(),
            Some("Combined Charging System")
        );
    }
}
