// ============================================================================
// SNAPSHOT STREAM - Reconstruye la colección completa a partir de eventos
// ============================================================================
// El canal de streaming del Realtime Database envía eventos `put`/`patch`
// relativos a la ruta suscrita (`{"path": "/a/b", "data": ...}`). Aquí se
// aplican sobre un árbol JSON local y se emite el snapshot completo tras
// cada cambio, que es lo que consumen las vistas.
// ============================================================================

use futures::future;
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use serde_json::{Map, Value};
use crate::services::backend::{BackendError, Snapshot, SnapshotStream};

pub const EVENT_PUT: &str = "put";
pub const EVENT_PATCH: &str = "patch";
pub const EVENT_KEEP_ALIVE: &str = "keep-alive";
pub const EVENT_CANCEL: &str = "cancel";
pub const EVENT_AUTH_REVOKED: &str = "auth_revoked";

#[derive(Deserialize)]
struct EventPayload {
    path: String,
    #[serde(default)]
    data: Value,
}

/// Árbol local de la ruta suscrita
#[derive(Debug, Default)]
pub struct SnapshotAccumulator {
    root: Value,
}

impl SnapshotAccumulator {
    /// Aplica un evento. `Ok(Some(_))` cuando la colección cambió,
    /// `Ok(None)` para eventos que no tocan datos (keep-alive, desconocidos).
    pub fn apply(&mut self, event: &str, data: &str) -> Result<Option<Snapshot>, BackendError> {
        match event {
            EVENT_PUT => {
                let payload = parse_payload(data)?;
                set_at(&mut self.root, &segments(&payload.path), payload.data);
                Ok(Some(self.snapshot()))
            }
            EVENT_PATCH => {
                let payload = parse_payload(data)?;
                let children = match payload.data {
                    Value::Object(children) => children,
                    other => {
                        return Err(BackendError::Parse(format!("patch without object data: {}", other)))
                    }
                };
                let base = segments(&payload.path);
                for (key, value) in children {
                    let mut path = base.clone();
                    path.extend(segments(&key));
                    set_at(&mut self.root, &path, value);
                }
                Ok(Some(self.snapshot()))
            }
            EVENT_KEEP_ALIVE => Ok(None),
            EVENT_CANCEL => Err(BackendError::PermissionDenied(
                if data.is_empty() || data == "null" { EVENT_CANCEL.to_string() } else { data.to_string() },
            )),
            EVENT_AUTH_REVOKED => Err(BackendError::PermissionDenied(EVENT_AUTH_REVOKED.to_string())),
            other => {
                log::debug!("📡 [STREAM] Evento ignorado: {}", other);
                Ok(None)
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.root.clone())
    }
}

fn parse_payload(data: &str) -> Result<EventPayload, BackendError> {
    serde_json::from_str(data).map_err(|e| BackendError::Parse(e.to_string()))
}

fn segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Escribe `value` en `path`; `null` borra y poda los padres que quedan vacíos
fn set_at(node: &mut Value, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *node = value;
        return;
    };

    if value.is_null() {
        if let Value::Object(map) = node {
            let now_empty = match map.get_mut(head) {
                Some(child) if !rest.is_empty() => {
                    set_at(child, rest, Value::Null);
                    is_vacant(child)
                }
                Some(_) => true,
                None => false,
            };
            if now_empty {
                map.shift_remove(head);
            }
        }
        if is_vacant(node) {
            *node = Value::Null;
        }
        return;
    }

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(head.clone()).or_insert(Value::Null);
        set_at(child, rest, value);
    }
}

fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Convierte un stream de eventos `(tipo, data)` en un stream de snapshots completos
pub fn snapshots_from_events<S>(events: S) -> SnapshotStream
where
    S: Stream<Item = Result<(String, String), BackendError>> + 'static,
{
    events
        .scan(SnapshotAccumulator::default(), |acc, item| {
            let out = match item {
                Ok((event, data)) => acc.apply(&event, &data).transpose(),
                Err(e) => Some(Err(e)),
            };
            future::ready(Some(out))
        })
        .filter_map(future::ready)
        .boxed_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::stream;
    use serde_json::json;

    fn put(path: &str, data: Value) -> String {
        json!({ "path": path, "data": data }).to_string()
    }

    #[test]
    fn initial_put_replaces_the_root() {
        let mut acc = SnapshotAccumulator::default();
        let snap = acc
            .apply(EVENT_PUT, &put("/", json!({ "a": { "name": "A" } })))
            .unwrap()
            .unwrap();
        assert_eq!(snap.value(), &json!({ "a": { "name": "A" } }));
    }

    #[test]
    fn nested_put_and_patch_update_in_place() {
        let mut acc = SnapshotAccumulator::default();
        acc.apply(EVENT_PUT, &put("/", json!({ "b": { "name": "B" }, "a": { "name": "A" } }))).unwrap();
        acc.apply(EVENT_PUT, &put("/a/name", json!("A2"))).unwrap();
        let snap = acc
            .apply(EVENT_PATCH, &put("/", json!({ "c": { "name": "C" }, "b/name": "B2" })))
            .unwrap()
            .unwrap();

        assert_eq!(snap.value()["a"]["name"], "A2");
        assert_eq!(snap.value()["b"]["name"], "B2");
        // El orden de inserción se mantiene: b, a, c
        let keys: Vec<_> = snap.value().as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn null_put_removes_and_prunes() {
        let mut acc = SnapshotAccumulator::default();
        acc.apply(EVENT_PUT, &put("/", json!({ "a": { "persons": { "p": { "name": "x" } } }, "b": 1 }))).unwrap();
        let snap = acc.apply(EVENT_PUT, &put("/a/persons/p", Value::Null)).unwrap().unwrap();
        assert_eq!(snap.value(), &json!({ "b": 1 }));

        let snap = acc.apply(EVENT_PUT, &put("/b", Value::Null)).unwrap().unwrap();
        assert!(!snap.exists());
        assert!(snap.is_empty());
    }

    #[test]
    fn keep_alive_emits_nothing_and_cancel_is_an_error() {
        let mut acc = SnapshotAccumulator::default();
        assert_eq!(acc.apply(EVENT_KEEP_ALIVE, "null").unwrap(), None);
        assert!(matches!(
            acc.apply(EVENT_CANCEL, "null"),
            Err(BackendError::PermissionDenied(_))
        ));
        assert!(matches!(
            acc.apply(EVENT_AUTH_REVOKED, "credential is no longer valid"),
            Err(BackendError::PermissionDenied(_))
        ));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let mut acc = SnapshotAccumulator::default();
        assert!(matches!(acc.apply(EVENT_PUT, "{not json"), Err(BackendError::Parse(_))));
        assert!(matches!(
            acc.apply(EVENT_PATCH, &put("/", json!(3))),
            Err(BackendError::Parse(_))
        ));
    }

    #[test]
    fn event_stream_yields_full_snapshots_and_skips_keep_alive() {
        let events = stream::iter(vec![
            Ok((EVENT_PUT.to_string(), put("/", json!({ "x": 1 })))),
            Ok((EVENT_KEEP_ALIVE.to_string(), "null".to_string())),
            Ok((EVENT_PATCH.to_string(), put("/", json!({ "y": 2 })))),
            Err(BackendError::Network("down".into())),
        ]);
        let items: Vec<_> = block_on(snapshots_from_events(events).collect());
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap().value(), &json!({ "x": 1 }));
        assert_eq!(items[1].as_ref().unwrap().value(), &json!({ "x": 1, "y": 2 }));
        assert_eq!(items[2], Err(BackendError::Network("down".into())));
    }
}
