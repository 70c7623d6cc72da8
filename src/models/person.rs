use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::de::string_or_number;

/// Miembro del directorio (proyección de solo lectura del backend)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Clave del nodo en el backend (no forma parte del valor almacenado)
    #[serde(default, skip_serializing)]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, rename = "bloodGroup", deserialize_with = "string_or_number")]
    pub blood_group: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
}

impl Person {
    /// Construye una persona a partir de una entrada `clave → valor` del snapshot.
    /// Valores que no son objetos se descartan.
    pub fn from_entry(key: &str, value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let mut person: Person = serde_json::from_value(value.clone()).ok()?;
        person.id = key.to_string();
        Some(person)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_entry_maps_backend_field_names() {
        let value = json!({
            "title": "সভাপতি",
            "name": "আব্দুল করিম",
            "bloodGroup": "B+",
            "phone": 1711000000u64,
            "email": "karim@example.com"
        });
        let person = Person::from_entry("p1", &value).unwrap();
        assert_eq!(person.id, "p1");
        assert_eq!(person.blood_group, "B+");
        assert_eq!(person.phone, "1711000000");
        assert_eq!(person.tel_href(), "tel:1711000000");
    }

    #[test]
    fn non_object_entries_are_skipped() {
        assert!(Person::from_entry("x", &json!("text")).is_none());
        assert!(Person::from_entry("x", &Value::Null).is_none());
    }
}
