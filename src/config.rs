use serde::{Deserialize, Serialize};

/// Configuración de la aplicación (resuelta en tiempo de compilación)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub database_auth: Option<String>,
    pub environment: String,
    pub enable_logging: bool,
    pub app_name: String,
    pub timing: TimingConfig,
    pub cookie_expiry_days: i64,
}

/// Intervalos y retrasos de la UI, en milisegundos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    pub session_poll_interval_ms: u32,
    pub clock_tick_ms: u32,
    pub splash_duration_ms: u32,
    pub not_found_redirect_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            session_poll_interval_ms: 1000,
            clock_tick_ms: 1000,
            splash_duration_ms: 3000,
            not_found_redirect_ms: 3000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "https://iabnu-app-default-rtdb.firebaseio.com".to_string(),
            database_auth: None,
            environment: "development".to_string(),
            enable_logging: true,
            app_name: "IABNU".to_string(),
            timing: TimingConfig::default(),
            cookie_expiry_days: 7,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let timing = TimingConfig::default();

        Self {
            database_url: option_env!("DATABASE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.database_url),
            database_auth: option_env!("DATABASE_AUTH")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            app_name: option_env!("APP_NAME")
                .unwrap_or("IABNU").to_string(),
            timing: TimingConfig {
                session_poll_interval_ms: option_env!("SESSION_POLL_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(timing.session_poll_interval_ms),
                clock_tick_ms: option_env!("CLOCK_TICK_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(timing.clock_tick_ms),
                splash_duration_ms: option_env!("SPLASH_DURATION_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(timing.splash_duration_ms),
                not_found_redirect_ms: option_env!("NOT_FOUND_REDIRECT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(timing.not_found_redirect_ms),
            },
            cookie_expiry_days: option_env!("COOKIE_EXPIRY_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cookie_expiry_days),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let config = AppConfig::default();
        assert_eq!(config.timing.session_poll_interval_ms, 1000);
        assert_eq!(config.timing.splash_duration_ms, 3000);
        assert_eq!(config.timing.not_found_redirect_ms, 3000);
        assert_eq!(config.cookie_expiry_days, 7);
    }
}
