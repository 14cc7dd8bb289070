//! The `{success, data}` wrapper used by every stations API response.

use serde::Deserialize;

/// Response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,

    pub data: Option<T>,

    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload, or `None` when the API reported no result.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(env.into_data(), Some(vec![1, 2]));
    }

    #[test]
    fn unsuccessful_envelope_yields_nothing() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"success": false, "data": [1], "message": "database unavailable"}"#,
        )
        .unwrap();
        assert_eq!(env.message.as_deref(), Some("database unavailable"));
        assert_eq!(env.into_data(), None);
    }

    #[test]
    fn missing_data_yields_nothing() {
        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(env.into_data(), None);

        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": null}"#).unwrap();
        assert_eq!(env.into_data(), None);
    }
}
