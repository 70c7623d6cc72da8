// ============================================================================
// BACKEND - Contrato del almacén jerárquico clave-valor
// ============================================================================

use async_trait::async_trait;
use futures::stream::LocalBoxStream;
use serde_json::Value;
use thiserror::Error;

/// Fallos de transporte. "Sin datos" NO es un error: es un `Snapshot` vacío.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    #[error("stream closed")]
    StreamClosed,
}

/// Valor completo en una ruta del backend
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    value: Value,
}

impl Snapshot {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn empty() -> Self {
        Self { value: Value::Null }
    }

    /// Como `exists()` del SDK: cualquier valor que no sea `null`
    pub fn exists(&self) -> bool {
        !self.value.is_null()
    }

    /// Colección sin hijos: `null`, `{}` o `[]`
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.iter().all(Value::is_null),
            _ => false,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Secuencia push de snapshots completos; cada cambio remoto re-entrega la colección
pub type SnapshotStream = LocalBoxStream<'static, Result<Snapshot, BackendError>>;

/// Almacén remoto. `?Send`: todo corre en el hilo único del navegador.
#[async_trait(?Send)]
pub trait RealtimeBackend {
    /// Lectura puntual
    async fn get(&self, path: &str) -> Result<Snapshot, BackendError>;

    /// Añade un hijo con clave generada por el backend y devuelve esa clave
    async fn push(&self, path: &str, value: Value) -> Result<String, BackendError>;

    /// Abre un listener nuevo en `path`. El listener se cierra al soltar el stream.
    fn subscribe(&self, path: &str) -> Result<SnapshotStream, BackendError>;
}

/// Las claves del backend no admiten `. $ # [ ] /` ni pueden estar vacías
pub fn validate_key(key: &str) -> Result<&str, BackendError> {
    let invalid = key.trim().is_empty()
        || key.chars().any(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/') || c.is_control());
    if invalid {
        Err(BackendError::InvalidKey(key.to_string()))
    } else {
        Ok(key)
    }
}
