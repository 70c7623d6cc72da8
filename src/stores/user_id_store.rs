// ============================================================================
// USER ID STORE - Cookie (efímera) + localStorage (duradera)
// ============================================================================
// Ambos guardan el mismo valor bajo la clave `userId`. No hay bloqueo entre
// ellos: pueden divergir si otra pestaña escribe en medio.
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use crate::config::CONFIG;
use crate::utils::constants::USER_ID_KEY;

/// Backend de almacenamiento del id de usuario
pub trait UserIdStore {
    /// Nombre corto para logs
    fn name(&self) -> &'static str;
    fn load(&self) -> Option<String>;
    fn save(&self, user_id: &str) -> Result<(), String>;
    fn remove(&self) -> Result<(), String>;
}

// ============================================================================
// COOKIE
// ============================================================================

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Busca `name` en un `document.cookie` ("a=1; b=2")
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Asignación para `document.cookie` con caducidad absoluta
pub fn cookie_assignment(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        expires.format(COOKIE_DATE_FORMAT)
    )
}

/// Asignación que borra la cookie (fecha en el pasado)
pub fn expired_cookie_assignment(name: &str) -> String {
    format!("{}=; expires={}; path=/", name, EXPIRED)
}

pub struct CookieStore {
    expiry_days: i64,
}

impl CookieStore {
    pub fn new(expiry_days: i64) -> Self {
        Self { expiry_days }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.cookie_expiry_days)
    }

    fn document() -> Result<HtmlDocument, String> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "No document".to_string())?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| "Document is not an HtmlDocument".to_string())
    }

    fn write(&self, assignment: &str) -> Result<(), String> {
        Self::document()?
            .set_cookie(assignment)
            .map_err(|e| format!("Error escribiendo cookie: {:?}", e))
    }
}

impl UserIdStore for CookieStore {
    fn name(&self) -> &'static str {
        "cookie"
    }

    fn load(&self) -> Option<String> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        let raw = read_cookie(&cookies, USER_ID_KEY)?;
        js_sys::decode_uri_component(&raw)
            .ok()
            .map(String::from)
            .filter(|value| !value.is_empty())
    }

    fn save(&self, user_id: &str) -> Result<(), String> {
        let value = String::from(js_sys::encode_uri_component(user_id));
        let expires = Utc::now() + Duration::days(self.expiry_days);
        self.write(&cookie_assignment(USER_ID_KEY, &value, expires))
    }

    fn remove(&self) -> Result<(), String> {
        self.write(&expired_cookie_assignment(USER_ID_KEY))
    }
}

// ============================================================================
// LOCAL STORAGE
// ============================================================================

/// Se guarda el string plano (sin JSON) para que otras apps del mismo
/// origen lean el mismo valor.
pub struct DeviceStore;

impl DeviceStore {
    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window".to_string())?
            .local_storage()
            .map_err(|e| format!("localStorage no disponible: {:?}", e))?
            .ok_or_else(|| "localStorage no disponible".to_string())
    }
}

impl UserIdStore for DeviceStore {
    fn name(&self) -> &'static str {
        "localStorage"
    }

    fn load(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(USER_ID_KEY)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    }

    fn save(&self, user_id: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(USER_ID_KEY, user_id)
            .map_err(|e| format!("Error guardando userId: {:?}", e))
    }

    fn remove(&self) -> Result<(), String> {
        Self::storage()?
            .remove_item(USER_ID_KEY)
            .map_err(|e| format!("Error borrando userId: {:?}", e))
    }
}

// ============================================================================
// MEMORIA (tests)
// ============================================================================

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    value: std::cell::RefCell<Option<String>>,
    pub writes: std::cell::Cell<usize>,
    blocked: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn holding(user_id: &str) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = Some(user_id.to_string());
        store
    }

    /// Store que rechaza escrituras (cookies bloqueadas)
    pub fn blocked() -> Self {
        Self { blocked: true, ..Self::default() }
    }

    pub fn peek(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl UserIdStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> Option<String> {
        self.peek().filter(|value| !value.is_empty())
    }

    fn save(&self, user_id: &str) -> Result<(), String> {
        if self.blocked {
            return Err("store bloqueado".to_string());
        }
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = Some(user_id.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), String> {
        self.writes.set(self.writes.get() + 1);
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn read_cookie_finds_exact_name() {
        let cookies = "theme=dark; userId=42; userIdOld=7";
        assert_eq!(read_cookie(cookies, "userId").as_deref(), Some("42"));
        assert_eq!(read_cookie(cookies, "user"), None);
        assert_eq!(read_cookie("", "userId"), None);
    }

    #[test]
    fn cookie_assignment_uses_http_date_and_root_path() {
        let expires = Utc.with_ymd_and_hms(2026, 10, 23, 8, 5, 9).unwrap();
        assert_eq!(
            cookie_assignment("userId", "1", expires),
            "userId=1; expires=Fri, 23 Oct 2026 08:05:09 GMT; path=/"
        );
    }

    #[test]
    fn clearing_sets_a_past_expiry() {
        let assignment = expired_cookie_assignment("userId");
        assert!(assignment.starts_with("userId=;"));
        assert!(assignment.contains("1970"));
    }
}
