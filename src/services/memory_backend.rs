//! Backend en memoria para tests: mismo contrato que `FirebaseClient`.

use std::cell::{Cell, RefCell};
use async_trait::async_trait;
use futures::channel::mpsc;
use futures::StreamExt;
use serde_json::{Map, Value};
use crate::services::backend::{BackendError, RealtimeBackend, Snapshot, SnapshotStream};

#[derive(Default)]
pub struct MemoryBackend {
    root: RefCell<Value>,
    listeners: RefCell<Vec<(String, mpsc::UnboundedSender<Result<Snapshot, BackendError>>)>>,
    failure: RefCell<Option<BackendError>>,
    next_key: Cell<u64>,
    pub gets: Cell<usize>,
    pub pushes: Cell<usize>,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(value: Value) -> Self {
        let backend = Self::new();
        *backend.root.borrow_mut() = value;
        backend
    }

    /// Todas las operaciones siguientes fallan con `error`
    pub fn fail_with(&self, error: BackendError) {
        *self.failure.borrow_mut() = Some(error);
    }

    fn check(&self) -> Result<(), BackendError> {
        match self.failure.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    pub fn read(&self, path: &str) -> Value {
        let root = self.root.borrow();
        let mut node = &*root;
        for segment in segments(path) {
            match node.get(segment) {
                Some(child) => node = child,
                None => return Value::Null,
            }
        }
        node.clone()
    }

    /// Escribe y re-entrega la colección completa a los listeners activos
    pub fn set(&self, path: &str, value: Value) {
        {
            let mut root = self.root.borrow_mut();
            let mut node = &mut *root;
            for segment in segments(path) {
                if !node.is_object() {
                    *node = Value::Object(Map::new());
                }
                node = match node {
                    Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
                    _ => unreachable!("node was just replaced by an object"),
                };
            }
            *node = value;
        }
        self.notify();
    }

    fn notify(&self) {
        self.listeners.borrow_mut().retain(|(path, sender)| {
            sender
                .unbounded_send(Ok(Snapshot::new(self.read(path))))
                .is_ok()
        });
    }

    /// Listeners todavía abiertos (los streams soltados se descartan al notificar)
    pub fn open_listeners(&self) -> usize {
        self.listeners.borrow_mut().retain(|(_, sender)| !sender.is_closed());
        self.listeners.borrow().len()
    }
}

#[async_trait(?Send)]
impl RealtimeBackend for MemoryBackend {
    async fn get(&self, path: &str) -> Result<Snapshot, BackendError> {
        self.gets.set(self.gets.get() + 1);
        self.check()?;
        Ok(Snapshot::new(self.read(path)))
    }

    async fn push(&self, path: &str, value: Value) -> Result<String, BackendError> {
        self.pushes.set(self.pushes.get() + 1);
        self.check()?;
        let key = format!("-M{:04}", self.next_key.get());
        self.next_key.set(self.next_key.get() + 1);
        self.set(&format!("{}/{}", path, key), value);
        Ok(key)
    }

    fn subscribe(&self, path: &str) -> Result<SnapshotStream, BackendError> {
        self.check()?;
        let (sender, receiver) = mpsc::unbounded();
        // Igual que el listener real: el primer evento es el estado actual
        let _ = sender.unbounded_send(Ok(Snapshot::new(self.read(path))));
        self.listeners.borrow_mut().push((path.to_string(), sender));
        Ok(receiver.boxed_local())
    }
}
