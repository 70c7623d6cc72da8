// ============================================================================
// REPORT VIEW - Formulario de reporte con filtro en vivo
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};
use crate::dom::{input_value, on_input, on_submit, set_input_value, set_text_content, toggle_class, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::bengali::to_bengali_digits;
use crate::utils::i18n::t;
use crate::viewmodels::report_viewmodel::{ReportField, ReportViewModel};

fn render_input(
    vm: &Rc<ReportViewModel>,
    field: ReportField,
    label: &str,
    tag: &str,
) -> Result<(Element, Element), JsValue> {
    let input = ElementBuilder::new(tag)?
        .class("form-input")
        .attr("required", "")?
        .build();
    if tag == "textarea" {
        input.set_attribute("rows", "4")?;
    }

    {
        let vm = vm.clone();
        let target = input.clone();
        on_input(&input, move |_| {
            let typed = input_value(&target);
            let shown = vm.set_field(field, &typed);
            if shown != typed {
                set_input_value(&target, &shown);
            }
        })?;
    }

    let group = ElementBuilder::new("label")?
        .class("form-group")
        .child(ElementBuilder::new("span")?.class("form-label").text(label).build())?
        .child(input.clone())?
        .build();
    Ok((group, input))
}

pub fn render_report(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let vm = Rc::new(ReportViewModel::new(state.reports.clone()));

    let (branch, branch_input) = render_input(&vm, ReportField::Branch, &t("report_branch", &lang), "input")?;
    let (district, district_input) = render_input(&vm, ReportField::District, &t("report_district", &lang), "input")?;
    let (kind, kind_input) = render_input(&vm, ReportField::Kind, &t("report_type", &lang), "input")?;
    let (description, description_input) =
        render_input(&vm, ReportField::Description, &t("report_description", &lang), "textarea")?;

    let filtered = ElementBuilder::new("p")?.class("filtered-count hidden").build();
    {
        let vm = vm.clone();
        let filtered = filtered.clone();
        let lang = lang.clone();
        on_input(&description_input, move |_| {
            let count = vm.filtered_words();
            set_text_content(&filtered, &format!("{}: {}", t("filtered_words", &lang), to_bengali_digits(&count.to_string())));
            let _ = toggle_class(&filtered, "hidden", count == 0);
        })?;
    }

    let status = ElementBuilder::new("p")?.class("form-status hidden").build();
    let submit = ElementBuilder::new("button")?
        .class("primary-button")
        .attr("type", "submit")?
        .text(&t("report_submit", &lang))
        .build();

    let form = ElementBuilder::new("form")?
        .class("report-form")
        .children([branch, district, kind, description, filtered.clone(), status.clone(), submit.clone()])?
        .build();

    let title = t("menu_report", &lang);
    let inputs = [branch_input, district_input, kind_input, description_input];
    on_submit(&form, move || {
        if vm.is_submitting() {
            return;
        }
        let vm = vm.clone();
        let status = status.clone();
        let submit = submit.clone();
        let filtered = filtered.clone();
        let inputs = inputs.clone();
        let lang = lang.clone();

        if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        }
        spawn_local(async move {
            let result = vm.submit().await;
            if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(false);
            }
            let (message, ok) = match result {
                Ok(_) => {
                    for input in &inputs {
                        set_input_value(input, "");
                    }
                    let _ = toggle_class(&filtered, "hidden", true);
                    (t("report_success", &lang), true)
                }
                Err(e) => (t(e.message_key(), &lang), false),
            };
            set_text_content(&status, &message);
            let _ = toggle_class(&status, "success", ok);
            let _ = toggle_class(&status, "error", !ok);
            let _ = toggle_class(&status, "hidden", false);
        });
    })?;

    Ok(ElementBuilder::new("section")?
        .class("report-page")
        .child(ElementBuilder::new("h1")?.class("page-title").text(&title).build())?
        .child(form)?
        .build())
}
