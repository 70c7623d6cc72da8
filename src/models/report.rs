use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

/// Contenido del formulario de reporte antes de enviarlo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub branch: String,
    pub district: String,
    pub kind: String,
    pub description: String,
}

impl ReportDraft {
    pub fn has_blank_fields(&self) -> bool {
        [&self.branch, &self.district, &self.kind, &self.description]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// Registro append-only bajo `reports`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub branch: String,
    pub district: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Epoch en milisegundos
    pub timestamp: i64,
    pub dd: u32,
    pub mm: u32,
    pub yy: i32,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl Report {
    /// Sella el borrador con `now`; dd/mm/yy salen de la zona horaria de `now`
    pub fn stamp<Tz: TimeZone>(draft: ReportDraft, user_id: &str, now: &DateTime<Tz>) -> Self {
        Self {
            branch: draft.branch,
            district: draft.district,
            kind: draft.kind,
            description: draft.description,
            timestamp: now.timestamp_millis(),
            dd: now.day(),
            mm: now.month(),
            yy: now.year(),
            user_id: user_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn draft() -> ReportDraft {
        ReportDraft {
            branch: "ঢাকা শাখা".into(),
            district: "ঢাকা".into(),
            kind: "সাধারণ".into(),
            description: "বিবরণ".into(),
        }
    }

    #[test]
    fn stamp_decomposes_local_date() {
        // 2024-03-31 23:30 UTC es 1 de abril en Dhaka (+06:00)
        let dhaka = FixedOffset::east_opt(6 * 3600).unwrap();
        let now = dhaka.with_ymd_and_hms(2024, 4, 1, 5, 30, 0).unwrap();
        let report = Report::stamp(draft(), "1", &now);
        assert_eq!((report.dd, report.mm, report.yy), (1, 4, 2024));
        assert_eq!(report.timestamp, 1_711_927_800_000);
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let value = serde_json::to_value(Report::stamp(draft(), "7", &now)).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            ["branch", "district", "type", "description", "timestamp", "dd", "mm", "yy", "userId"]
        );
        assert_eq!(value["userId"], "7");
    }

    #[test]
    fn blank_fields_are_detected() {
        let mut d = draft();
        assert!(!d.has_blank_fields());
        d.kind = "   ".into();
        assert!(d.has_blank_fields());
    }
}
