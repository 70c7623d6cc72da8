use gloo_storage::{LocalStorage, Storage};

/// Lee una preferencia simple (string) de localStorage
pub fn load_pref(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key).ok()
}

pub fn save_pref(key: &str, value: &str) -> Result<(), String> {
    LocalStorage::set(key, value)
        .map_err(|e| format!("Error guardando preferencia {}: {}", key, e))
}
