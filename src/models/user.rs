use serde::{Deserialize, Serialize};
use crate::models::de::{opt_string_or_number, string_or_number};

/// Usuario tal y como está guardado en `users/{id}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub password: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub last_name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub profile_photo: Option<String>,
}

impl UserRecord {
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            title: self.title.clone(),
            profile_photo: self.profile_photo.clone(),
        }
    }
}

/// Perfil mostrado en la pantalla de ajustes (nunca lleva la contraseña)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub profile_photo: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Inicial para el avatar cuando no hay foto
    pub fn initial(&self) -> String {
        self.first_name.chars().next().map(String::from).unwrap_or_default()
    }
}
