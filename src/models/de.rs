//! Helpers de deserialización para valores escritos a mano en la consola
//! del Realtime Database (números y strings mezclados, campos ausentes).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Acepta string, número o bool y lo normaliza a `String`; `null` → vacío
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(&value))
}

/// Variante opcional: `null`/vacío → `None`
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let text = value_to_string(&value);
    Ok(if text.is_empty() { None } else { Some(text) })
}

pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_number")]
        phone: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        photo: Option<String>,
    }

    #[test]
    fn numbers_become_strings() {
        let probe: Probe = serde_json::from_str(r#"{"phone": 1712345678, "photo": ""}"#).unwrap();
        assert_eq!(probe.phone, "1712345678");
        assert_eq!(probe.photo, None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.phone, "");
        assert!(probe.photo.is_none());
    }
}
