// ============================================================================
// REPORT SERVICE - Filtro de palabras + alta append-only en `reports`
// ============================================================================

use std::rc::Rc;
use chrono::{DateTime, Local, TimeZone};
use thiserror::Error;
use crate::models::{Report, ReportDraft};
use crate::services::backend::{BackendError, RealtimeBackend};
use crate::stores::session_store::SessionStore;
use crate::utils::constants::REPORTS_PATH;

const BANNED_WORDS: [&str; 3] = ["অপশব্দ", "অশ্লীল", "গালি"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("all report fields are required")]
    MissingFields,
    #[error("user not authenticated")]
    Unauthenticated,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ReportError {
    /// Clave i18n del mensaje mostrado en el formulario
    pub fn message_key(&self) -> &'static str {
        match self {
            ReportError::MissingFields => "fill_all_fields",
            ReportError::Unauthenticated => "report_unauthenticated",
            ReportError::Backend(_) => "report_failed",
        }
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{0980}'..='\u{09FF}').contains(&c) || c.is_whitespace()
}

/// Limpia el texto y enmascara las palabras prohibidas.
/// Devuelve el texto resultante y cuántas palabras se enmascararon.
pub fn sanitize(text: &str) -> (String, usize) {
    let stripped: String = text.chars().filter(|c| is_allowed(*c)).collect();
    let mut filtered = 0;

    let words: Vec<String> = stripped
        .split(' ')
        .map(|word| {
            if BANNED_WORDS.contains(&word.to_lowercase().as_str()) {
                filtered += 1;
                "*".repeat(word.chars().count())
            } else {
                word.to_string()
            }
        })
        .collect();

    (words.join(" "), filtered)
}

pub struct ReportService {
    backend: Rc<dyn RealtimeBackend>,
    session: Rc<SessionStore>,
}

impl ReportService {
    pub fn new(backend: Rc<dyn RealtimeBackend>, session: Rc<SessionStore>) -> Self {
        Self { backend, session }
    }

    /// Envía el borrador con la hora local actual; devuelve la clave generada
    pub async fn submit(&self, draft: ReportDraft) -> Result<String, ReportError> {
        self.submit_at(draft, &Local::now()).await
    }

    pub async fn submit_at<Tz: TimeZone>(
        &self,
        draft: ReportDraft,
        now: &DateTime<Tz>,
    ) -> Result<String, ReportError> {
        if draft.has_blank_fields() {
            return Err(ReportError::MissingFields);
        }

        let user_id = self
            .session
            .resolve_user_id()
            .ok_or(ReportError::Unauthenticated)?;

        let report = Report::stamp(draft, &user_id, now);
        let value = serde_json::to_value(&report)
            .map_err(|e| BackendError::Parse(e.to_string()))?;

        let key = self.backend.push(REPORTS_PATH, value).await?;
        log::info!("📝 [REPORT] Reporte {} enviado por {}", key, user_id);
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::services::memory_backend::MemoryBackend;
    use crate::stores::user_id_store::MemoryStore;

    fn draft() -> ReportDraft {
        ReportDraft {
            branch: "মিরপুর".into(),
            district: "ঢাকা".into(),
            kind: "সাধারণ".into(),
            description: "সব ঠিক আছে".into(),
        }
    }

    fn service(cookie: MemoryStore) -> (Rc<MemoryBackend>, ReportService) {
        let backend = Rc::new(MemoryBackend::new());
        let session = Rc::new(SessionStore::new(
            backend.clone(),
            Rc::new(cookie),
            Rc::new(MemoryStore::default()),
        ));
        (backend.clone(), ReportService::new(backend, session))
    }

    #[test]
    fn banned_word_is_masked_by_char_count() {
        let (text, count) = sanitize("আমি অপশব্দ বলেছি");
        assert_eq!(text, "আমি ****** বলেছি");
        assert_eq!(count, 1);
    }

    #[test]
    fn punctuation_is_stripped_and_spacing_kept() {
        let (text, count) = sanitize("hello,  world! গালি");
        assert_eq!(text, "hello  world ****");
        assert_eq!(count, 1);
        assert_eq!(sanitize(""), (String::new(), 0));
    }

    #[test]
    fn banned_word_glued_to_punctuation_is_still_caught() {
        let (text, count) = sanitize("অশ্লীল!");
        assert_eq!(count, 1);
        assert_eq!(text.chars().filter(|c| *c == '*').count(), "অশ্লীল".chars().count());
    }

    #[test]
    fn submit_appends_stamped_report() {
        let (backend, service) = service(MemoryStore::holding("1"));
        let dhaka = FixedOffset::east_opt(6 * 3600).unwrap();
        let now = dhaka.with_ymd_and_hms(2024, 4, 1, 5, 30, 0).unwrap();

        let key = block_on(service.submit_at(draft(), &now)).unwrap();
        let stored = backend.read(&format!("reports/{}", key));
        assert_eq!(stored["userId"], json!("1"));
        assert_eq!(stored["type"], json!("সাধারণ"));
        assert_eq!(stored["dd"], json!(1));
        assert_eq!(stored["mm"], json!(4));
        assert_eq!(stored["yy"], json!(2024));
        assert_eq!(stored["timestamp"], json!(now.timestamp_millis()));
    }

    #[test]
    fn submit_without_session_is_unauthenticated() {
        let (backend, service) = service(MemoryStore::default());
        let result = block_on(service.submit(draft()));
        assert_eq!(result, Err(ReportError::Unauthenticated));
        assert_eq!(backend.pushes.get(), 0);
    }

    #[test]
    fn blank_fields_never_reach_the_backend() {
        let (backend, service) = service(MemoryStore::holding("1"));
        let mut incomplete = draft();
        incomplete.branch = "  ".into();
        assert_eq!(block_on(service.submit(incomplete)), Err(ReportError::MissingFields));
        assert_eq!(backend.pushes.get(), 0);
    }

    #[test]
    fn backend_failure_is_surfaced() {
        let (backend, service) = service(MemoryStore::holding("1"));
        backend.fail_with(BackendError::Network("offline".into()));
        let result = block_on(service.submit(draft()));
        assert!(matches!(result, Err(ReportError::Backend(BackendError::Network(_)))));
    }
}
