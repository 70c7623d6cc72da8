// ============================================================================
// DIRECTORY SERVICE - jela / thana / union → secuencias ordenadas
// ============================================================================
// Un único adaptador "colección con claves → secuencia ordenada",
// parametrizado por ruta y forma del elemento. El orden es el de inserción
// del backend (NO se ordena por nombre ni por id).
// ============================================================================

use std::future::Future;
use std::rc::Rc;
use futures::future::{self, AbortHandle, Abortable};
use futures::stream::{self, LocalBoxStream, Stream, StreamExt};
use serde_json::Value;
use crate::models::{LocationNode, Person};
use crate::services::backend::{BackendError, RealtimeBackend, Snapshot, SnapshotStream};
use crate::state::directory_state::{LoadState, NodeState};
use crate::utils::constants::node_path;

/// Forma de un elemento construible desde una entrada `clave → valor`
pub trait DirectoryEntry: Sized {
    fn from_entry(key: &str, value: &Value) -> Option<Self>;
}

impl DirectoryEntry for Person {
    fn from_entry(key: &str, value: &Value) -> Option<Self> {
        Person::from_entry(key, value)
    }
}

impl DirectoryEntry for LocationNode {
    fn from_entry(key: &str, value: &Value) -> Option<Self> {
        LocationNode::from_entry(key, value)
    }
}

/// Resultado de normalizar un snapshot. `Empty` es una señal, no un error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<T> {
    Items(Vec<T>),
    Empty,
}

/// Convierte el mapa con claves en una secuencia en orden de inserción.
/// Las claves numéricas consecutivas llegan como array (con huecos `null`).
pub fn normalize<T: DirectoryEntry>(snapshot: &Snapshot) -> Normalized<T> {
    if snapshot.is_empty() {
        return Normalized::Empty;
    }
    let items: Vec<T> = match snapshot.value() {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| T::from_entry(key, value))
            .collect(),
        Value::Array(values) => values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| T::from_entry(&index.to_string(), value))
            .collect(),
        _ => Vec::new(),
    };

    if items.is_empty() {
        Normalized::Empty
    } else {
        Normalized::Items(items)
    }
}

/// Repositorio del directorio sobre cualquier `RealtimeBackend`
#[derive(Clone)]
pub struct DirectoryRepository {
    backend: Rc<dyn RealtimeBackend>,
}

impl DirectoryRepository {
    pub fn new(backend: Rc<dyn RealtimeBackend>) -> Self {
        Self { backend }
    }

    /// Stream perezoso e infinito de snapshots; cada llamada abre un listener nuevo
    pub fn subscribe(&self, path: &str) -> Result<SnapshotStream, BackendError> {
        self.backend.subscribe(path)
    }

    /// Colección normalizada: Loaded / Empty / Failed por cada entrega del backend
    pub fn collection<T>(&self, path: &str) -> LocalBoxStream<'static, LoadState<T>>
    where
        T: DirectoryEntry + 'static,
    {
        match self.subscribe(path) {
            Ok(snapshots) => snapshots
                .map(|item| match item {
                    Ok(snapshot) => LoadState::from(normalize::<T>(&snapshot)),
                    Err(e) => LoadState::Failed(e),
                })
                .boxed_local(),
            Err(e) => stream::once(future::ready(LoadState::Failed(e))).boxed_local(),
        }
    }

    /// Un único nodo (`thana/{id}`, `union/{id}`) con sus miembros anidados
    pub fn node(&self, collection: &str, id: &str) -> LocalBoxStream<'static, NodeState> {
        let node_id = id.to_string();
        match self.subscribe(&node_path(collection, id)) {
            Ok(snapshots) => snapshots
                .map(move |item| match item {
                    Ok(snapshot) => LocationNode::from_entry(&node_id, snapshot.value())
                        .map(NodeState::Found)
                        .unwrap_or(NodeState::NotFound),
                    Err(e) => NodeState::Failed(e),
                })
                .boxed_local(),
            // Un id que no puede ser clave no puede existir en el backend
            Err(BackendError::InvalidKey(_)) => stream::once(future::ready(NodeState::NotFound)).boxed_local(),
            Err(e) => stream::once(future::ready(NodeState::Failed(e))).boxed_local(),
        }
    }

    /// Lista plana de personas (p.ej. `jela`)
    pub fn persons(&self, path: &str) -> LocalBoxStream<'static, LoadState<Person>> {
        self.collection::<Person>(path)
    }

    /// Lista de nodos (p.ej. `thana`, `union`)
    pub fn nodes(&self, path: &str) -> LocalBoxStream<'static, LoadState<LocationNode>> {
        self.collection::<LocationNode>(path)
    }
}

/// Listener activo ligado a la vida de una vista. Al soltarlo se aborta la
/// tarea que consume el stream, y con ella se cierra el listener remoto.
pub struct Subscription {
    label: String,
    abort: AbortHandle,
}

impl Subscription {
    /// Consume `updates` en una tarea local y llama a `on_update` por cada entrega
    pub fn spawn<S, F>(label: &str, updates: S, on_update: F) -> Self
    where
        S: Stream + Unpin + 'static,
        F: FnMut(S::Item) + 'static,
    {
        let (task, subscription) = Self::prepare(label, updates, on_update);
        wasm_bindgen_futures::spawn_local(task);
        subscription
    }

    fn prepare<S, F>(label: &str, mut updates: S, mut on_update: F) -> (impl Future<Output = ()>, Self)
    where
        S: Stream + Unpin + 'static,
        F: FnMut(S::Item) + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let pump = async move {
            while let Some(update) = updates.next().await {
                on_update(update);
            }
        };
        let task = Abortable::new(pump, registration);
        let owned_label = label.to_string();
        let task = async move {
            if task.await.is_err() {
                log::debug!("🔌 [DIRECTORY] Tarea abortada: {}", owned_label);
            }
        };

        log::info!("🔌 [DIRECTORY] Listener activo: {}", label);
        (task, Self { label: label.to_string(), abort })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.abort.abort();
        log::info!("🔌 [DIRECTORY] Listener liberado: {}", self.label);
    }
}
