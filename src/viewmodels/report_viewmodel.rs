// ============================================================================
// REPORT VIEWMODEL - Estado del formulario de reporte
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::models::ReportDraft;
use crate::services::report_service::{sanitize, ReportError, ReportService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportField {
    Branch,
    District,
    Kind,
    Description,
}

pub struct ReportViewModel {
    service: Rc<ReportService>,
    draft: RefCell<ReportDraft>,
    filtered_words: Cell<usize>,
    submitting: Cell<bool>,
}

impl ReportViewModel {
    pub fn new(service: Rc<ReportService>) -> Self {
        Self {
            service,
            draft: RefCell::new(ReportDraft::default()),
            filtered_words: Cell::new(0),
            submitting: Cell::new(false),
        }
    }

    /// Actualiza un campo; devuelve el valor a mostrar (la descripción se filtra)
    pub fn set_field(&self, field: ReportField, value: &str) -> String {
        let mut draft = self.draft.borrow_mut();
        match field {
            ReportField::Branch => draft.branch = value.to_string(),
            ReportField::District => draft.district = value.to_string(),
            ReportField::Kind => draft.kind = value.to_string(),
            ReportField::Description => {
                let (clean, filtered) = sanitize(value);
                self.filtered_words.set(filtered);
                draft.description = clean.clone();
                return clean;
            }
        }
        value.to_string()
    }

    pub fn draft(&self) -> ReportDraft {
        self.draft.borrow().clone()
    }

    pub fn filtered_words(&self) -> usize {
        self.filtered_words.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Envía el formulario; solo se resetea si el envío tiene éxito
    pub async fn submit(&self) -> Result<String, ReportError> {
        self.submitting.set(true);
        let result = self.service.submit(self.draft()).await;
        self.submitting.set(false);

        match &result {
            Ok(_) => self.reset(),
            Err(e) => log::warn!("⚠️ [REPORT] Envío rechazado: {}", e),
        }
        result
    }

    fn reset(&self) {
        *self.draft.borrow_mut() = ReportDraft::default();
        self.filtered_words.set(0);
    }
}
