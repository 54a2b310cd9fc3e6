use seatbook_core::{CoreError, CoreResult, SubmissionForm};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};
use crate::fields::{plan_upsert, FieldPlan};

/// The booking `<form>`; the selection travels in one hidden input that is
/// created on first submit and reused afterwards
pub struct DomForm {
    document: Document,
    form: HtmlFormElement,
}

impl DomForm {
    pub fn new(document: Document, form: HtmlFormElement) -> Self {
        Self { document, form }
    }

    fn hidden_fields(&self, name: &str) -> Vec<HtmlInputElement> {
        let mut fields = Vec::new();
        if let Ok(list) = self.form.query_selector_all("input[type=hidden]") {
            for index in 0..list.length() {
                let input = list
                    .item(index)
                    .and_then(|node| node.dyn_into::<HtmlInputElement>().ok());
                if let Some(input) = input {
                    if input.name() == name {
                        fields.push(input);
                    }
                }
            }
        }
        fields
    }

    fn create_field(&self, name: &str, value: &str) -> Result<(), JsValue> {
        let input = self
            .document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(JsValue::from)?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        self.form.append_child(&input)?;
        Ok(())
    }
}

impl SubmissionForm for DomForm {
    fn upsert_field(&mut self, name: &str, value: &str) -> CoreResult<()> {
        match plan_upsert(self.hidden_fields(name)) {
            FieldPlan::Reuse { keep, strays } => {
                keep.set_value(value);
                for stray in &strays {
                    Element::remove(stray);
                }
                Ok(())
            }
            FieldPlan::Create => self
                .create_field(name, value)
                .map_err(|err| CoreError::FormWriteError {
                    field: name.to_string(),
                    reason: format!("{:?}", err),
                }),
        }
    }

    fn field_values(&self, name: &str) -> Vec<String> {
        self.hidden_fields(name).iter().map(|field| field.value()).collect()
    }
}
