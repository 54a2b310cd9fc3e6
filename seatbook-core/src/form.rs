use serde::Serialize;
use crate::CoreResult;

/// Outgoing booking form the selection is attached to
pub trait SubmissionForm {
    /// Leave exactly one field called `name` holding `value`
    fn upsert_field(&mut self, name: &str, value: &str) -> CoreResult<()>;

    /// Every value currently held under `name`, in form order
    fn field_values(&self, name: &str) -> Vec<String>;
}

/// In-memory form payload, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field the way markup would, duplicates allowed
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn count(&self, name: &str) -> usize {
        self.fields.iter().filter(|(field, _)| field == name).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl SubmissionForm for FormFields {
    fn upsert_field(&mut self, name: &str, value: &str) -> CoreResult<()> {
        let mut kept = false;
        self.fields.retain_mut(|(field, current)| {
            if field.as_str() != name {
                return true;
            }
            if kept {
                return false;
            }
            kept = true;
            *current = value.to_string();
            true
        });
        if !kept {
            self.append(name, value);
        }
        Ok(())
    }

    fn field_values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
            .collect()
    }
}
