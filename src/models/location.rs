use serde_json::Value;
use crate::models::de::value_to_string;
use crate::models::person::Person;

/// Nodo del directorio: jela (distrito), thana o union.
/// Se decodifica solo con `from_entry`: en el backend los miembros viven en `persons`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationNode {
    pub id: String,
    pub name: String,
    /// Miembros anidados en `persons`, en el orden de inserción del backend
    pub members: Vec<Person>,
}

impl LocationNode {
    pub fn from_entry(key: &str, value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name").map(value_to_string).unwrap_or_default();
        let members = object
            .get("persons")
            .and_then(Value::as_object)
            .map(|persons| {
                persons
                    .iter()
                    .filter_map(|(id, person)| Person::from_entry(id, person))
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            id: key.to_string(),
            name,
            members,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_persons_keep_backend_order() {
        let value = json!({
            "name": "কোতোয়ালী",
            "persons": {
                "z9": { "name": "প্রথম" },
                "a1": { "name": "দ্বিতীয়" }
            }
        });
        let node = LocationNode::from_entry("t1", &value).unwrap();
        assert_eq!(node.name, "কোতোয়ালী");
        let ids: Vec<_> = node.members.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["z9", "a1"]);
    }

    #[test]
    fn node_without_persons_has_no_members() {
        let node = LocationNode::from_entry("t2", &json!({ "name": "সদর" })).unwrap();
        assert!(node.members.is_empty());
    }
}
