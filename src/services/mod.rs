// ============================================================================
// SERVICES - SOLO comunicación con el backend (Realtime Database)
// ============================================================================

pub mod backend;
pub mod snapshot_stream;
pub mod firebase_client;
pub mod directory_service;
pub mod report_service;
pub mod auth_service;

#[cfg(test)]
pub mod memory_backend;

pub use backend::{BackendError, RealtimeBackend, Snapshot, SnapshotStream};
pub use firebase_client::FirebaseClient;
pub use directory_service::{DirectoryRepository, DirectoryEntry, Normalized, Subscription};
pub use report_service::{ReportService, ReportError, sanitize};
pub use auth_service::{AuthService, LoginError};
