// ============================================================================
// STORES - Persistencia local del userId + sesión verificada
// ============================================================================

pub mod user_id_store;
pub mod session_store;

pub use user_id_store::{CookieStore, DeviceStore, UserIdStore};
pub use session_store::SessionStore;

#[cfg(test)]
pub use user_id_store::MemoryStore;
