/// Clave compartida por la cookie y el localStorage
pub const USER_ID_KEY: &str = "userId";

/// Preferencia de idioma en localStorage
pub const LANGUAGE_PREF_KEY: &str = "language";

// Rutas del Realtime Database
pub const USERS_PATH: &str = "users";
pub const DISTRICTS_PATH: &str = "jela";
pub const THANA_PATH: &str = "thana";
pub const UNION_PATH: &str = "union";
pub const REPORTS_PATH: &str = "reports";

pub fn user_path(user_id: &str) -> String {
    format!("{}/{}", USERS_PATH, user_id)
}

/// Lookup puntual usado por la verificación periódica de sesión
pub fn user_id_path(user_id: &str) -> String {
    format!("{}/{}/id", USERS_PATH, user_id)
}

pub fn node_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}
