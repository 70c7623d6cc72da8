// ============================================================================
// FIREBASE CLIENT - Realtime Database por REST (stateless)
// ============================================================================
// GET  {path}.json                          → lectura puntual
// POST {path}.json                          → push, responde {"name": clave}
// GET  {path}.json  (text/event-stream)     → listener push vía EventSource
// ============================================================================

use std::pin::Pin;
use std::task::{Context, Poll};
use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use gloo_net::eventsource::futures::EventSource;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::Value;
use crate::config::CONFIG;
use crate::services::backend::{validate_key, BackendError, RealtimeBackend, Snapshot, SnapshotStream};
use crate::services::snapshot_stream::{
    snapshots_from_events, EVENT_AUTH_REVOKED, EVENT_CANCEL, EVENT_PATCH, EVENT_PUT,
};

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

/// Cliente del Realtime Database - SOLO comunicación HTTP
#[derive(Clone, Debug)]
pub struct FirebaseClient {
    base_url: String,
    auth: Option<String>,
}

impl FirebaseClient {
    pub fn new(base_url: &str, auth: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn from_config() -> Self {
        Self::new(&CONFIG.database_url, CONFIG.database_auth.clone())
    }

    /// URL REST de una ruta; cada segmento se valida como clave
    pub fn resource_url(&self, path: &str) -> Result<String, BackendError> {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(validate_key)
            .collect::<Result<Vec<_>, _>>()?;

        let mut url = format!("{}/{}.json", self.base_url, segments.join("/"));
        if let Some(auth) = &self.auth {
            url.push_str("?auth=");
            url.push_str(auth);
        }
        Ok(url)
    }

    async fn check_status(response: Response) -> Result<Response, BackendError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await
            .unwrap_or_else(|_| response.status_text());
        match status {
            401 | 403 => Err(BackendError::PermissionDenied(message)),
            _ => Err(BackendError::Http { status, message }),
        }
    }
}

#[async_trait(?Send)]
impl RealtimeBackend for FirebaseClient {
    async fn get(&self, path: &str) -> Result<Snapshot, BackendError> {
        let url = self.resource_url(path)?;
        log::debug!("📥 [RTDB] GET {}", path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        Ok(Snapshot::new(value))
    }

    async fn push(&self, path: &str, value: Value) -> Result<String, BackendError> {
        let url = self.resource_url(path)?;
        log::info!("📤 [RTDB] POST {}", path);

        let response = Request::post(&url)
            .json(&value)
            .map_err(|e| BackendError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let created = response
            .json::<PushResponse>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        log::info!("✅ [RTDB] Registro creado: {}/{}", path, created.name);
        Ok(created.name)
    }

    fn subscribe(&self, path: &str) -> Result<SnapshotStream, BackendError> {
        let url = self.resource_url(path)?;
        let mut source = EventSource::new(&url)
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let mut channels = Vec::new();
        for kind in [EVENT_PUT, EVENT_PATCH, EVENT_CANCEL, EVENT_AUTH_REVOKED] {
            let subscription = source
                .subscribe(kind)
                .map_err(|e| BackendError::Network(e.to_string()))?;
            // Cada suscripción recibe los errores de conexión; solo `put` los reporta
            let reports_errors = kind == EVENT_PUT;
            let channel = subscription
                .filter_map(move |item| {
                    let mapped = match item {
                        Ok((event, message)) => Some(Ok((event, message.data().as_string().unwrap_or_default()))),
                        Err(e) if reports_errors => Some(Err(BackendError::Network(format!("{:?}", e)))),
                        Err(_) => None,
                    };
                    futures::future::ready(mapped)
                })
                .boxed_local();
            channels.push(channel);
        }

        log::info!("🔌 [RTDB] Listener abierto en {}", path);
        Ok(snapshots_from_events(ListenerGuard {
            _source: source,
            events: stream::select_all(channels),
        }))
    }
}

/// Mantiene vivo el EventSource mientras alguien consume el stream;
/// al soltarlo, gloo cierra la conexión.
struct ListenerGuard<S> {
    _source: EventSource,
    events: S,
}

impl<S> Stream for ListenerGuard<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().events.poll_next_unpin(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_joins_segments() {
        let client = FirebaseClient::new("https://db.example.com/", None);
        assert_eq!(
            client.resource_url("users/1/id").unwrap(),
            "https://db.example.com/users/1/id.json"
        );
        assert_eq!(
            client.resource_url("/thana/").unwrap(),
            "https://db.example.com/thana.json"
        );
    }

    #[test]
    fn resource_url_appends_auth_token() {
        let client = FirebaseClient::new("https://db.example.com", Some("secret".into()));
        assert_eq!(
            client.resource_url("reports").unwrap(),
            "https://db.example.com/reports.json?auth=secret"
        );
    }

    #[test]
    fn resource_url_rejects_unsafe_segments() {
        let client = FirebaseClient::new("https://db.example.com", None);
        assert!(matches!(
            client.resource_url("users/1.5"),
            Err(BackendError::InvalidKey(_))
        ));
        assert!(matches!(
            client.resource_url("users/$x/id"),
            Err(BackendError::InvalidKey(_))
        ));
    }
}
