//! Filling in a form: step navigation, validation and submission

use super::validation::validate_field;
use crate::state::{Field, FieldValue, Form, FormStore, ResponseData};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Why a submission was refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(HashMap<String, String>),

    #[error("cannot submit from step {current} of {total}")]
    NotFinalStep { current: u32, total: u32 },

    #[error("this session was already submitted")]
    AlreadySubmitted,
}

/// One person's in-progress answers to a form
#[derive(Debug, Clone)]
pub struct FillSession {
    form: Form,
    current_step: u32,
    values: ResponseData,
    errors: HashMap<String, String>,
    submitted: bool,
}

impl FillSession {
    pub fn new(form: &Form) -> Self {
        Self {
            form: form.clone(),
            current_step: 1,
            values: ResponseData::new(),
            errors: HashMap::new(),
            submitted: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Number of steps the filler walks through
    pub fn total_steps(&self) -> u32 {
        if self.form.is_multi_step {
            self.form.max_field_step()
        } else {
            1
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step >= self.total_steps()
    }

    /// Completion percentage shown in the progress bar
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps()) * 100.0
    }

    /// Fields shown on the current step
    pub fn current_step_fields(&self) -> Vec<&Field> {
        if self.form.is_multi_step {
            self.form
                .fields
                .iter()
                .filter(|f| f.step_or_first() == self.current_step)
                .collect()
        } else {
            self.form.fields.iter().collect()
        }
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    pub fn values(&self) -> &ResponseData {
        &self.values
    }

    /// Record a value; any error shown for the field is cleared
    pub fn set_value(&mut self, field_id: &str, value: impl Into<FieldValue>) {
        self.values.insert(field_id.to_string(), value.into());
        self.errors.remove(field_id);
    }

    /// Add or remove one option of a checkbox field
    pub fn toggle_option(&mut self, field_id: &str, option: &str, checked: bool) {
        let mut selected = match self.values.get(field_id) {
            Some(FieldValue::List(items)) => items.clone(),
            _ => Vec::new(),
        };
        selected.retain(|o| o != option);
        if checked {
            selected.push(option.to_string());
        }
        self.set_value(field_id, selected);
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.errors.get(field_id).map(String::as_str)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Check every field on the current step, replacing the error map
    pub fn validate_current_step(&mut self) -> bool {
        let errors: HashMap<String, String> = self
            .current_step_fields()
            .into_iter()
            .filter_map(|field| {
                validate_field(field, self.values.get(&field.id)).map(|e| (field.id.clone(), e))
            })
            .collect();
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Advance when the current step validates; returns whether the step changed
    pub fn next_step(&mut self) -> bool {
        if !self.validate_current_step() || self.is_last_step() {
            return false;
        }
        self.current_step += 1;
        true
    }

    pub fn prev_step(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Validate the final step, wait `delay`, then record the response
    pub async fn submit(
        &mut self,
        store: &mut FormStore,
        delay: Duration,
    ) -> Result<String, SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.is_last_step() {
            return Err(SubmitError::NotFinalStep {
                current: self.current_step,
                total: self.total_steps(),
            });
        }
        if !self.validate_current_step() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let id = store.add_response(&self.form.id, self.values.clone());
        self.submitted = true;
        tracing::info!("Submitted response {id} for form {}", self.form.id);
        Ok(id)
    }
}
