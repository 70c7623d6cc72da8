// ============================================================================
// DIRECTORY STATE - Estado de carga de las colecciones remotas
// ============================================================================
// "Cargando" y "vacío confirmado" son estados distintos.

use crate::models::LocationNode;
use crate::services::backend::BackendError;
use crate::services::directory_service::Normalized;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(Vec<T>),
    Empty,
    Failed(BackendError),
}

impl<T> From<Normalized<T>> for LoadState<T> {
    fn from(normalized: Normalized<T>) -> Self {
        match normalized {
            Normalized::Items(items) => LoadState::Loaded(items),
            Normalized::Empty => LoadState::Empty,
        }
    }
}

/// Estado de un nodo individual (`thana/{id}`, `union/{id}`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeState {
    Loading,
    Found(LocationNode),
    NotFound,
    Failed(BackendError),
}
