//! The form builder store: forms, fields, responses, templates and undo history
//!
//! Every operation is synchronous and permissive: an unknown id or a missing
//! current form turns the call into a no-op, reported only through
//! `tracing::debug!`. When the store is backed by a [`StorageBackend`], each
//! transition that changes a persisted collection is saved immediately; save
//! failures are logged and kept in [`FormStore::persist_error`] without
//! touching in-memory state.

use super::history::History;
use super::model::{
    FieldDraft, FieldUpdate, Form, FormUpdate, Response, ResponseData, Template, MAX_STEPS,
};
use crate::storage::{PersistedState, StorageBackend, StorageError};
use chrono::Utc;
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Single source of truth for all form builder data
pub struct FormStore {
    /// Persisted collections; the current form lives in `state.forms`
    state: PersistedState,
    current_form_id: Option<String>,
    history: History<Form>,
    storage: Option<Box<dyn StorageBackend>>,
    persist_error: Option<StorageError>,
}

impl FormStore {
    /// In-memory store seeded with the built-in templates
    pub fn new() -> Self {
        Self::from_state(PersistedState::fresh())
    }

    /// In-memory store over existing collections
    pub fn from_state(state: PersistedState) -> Self {
        Self {
            state,
            current_form_id: None,
            history: History::new(),
            storage: None,
            persist_error: None,
        }
    }

    /// Load the collections from `storage` and save back to it after every change
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, StorageError> {
        let state = match storage.load()? {
            Some(state) => state,
            None => {
                tracing::info!("No saved form builder state, starting fresh");
                PersistedState::fresh()
            }
        };
        let mut store = Self::from_state(state);
        store.storage = Some(storage);
        Ok(store)
    }

    /// Override how many snapshots the undo log keeps
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = History::with_limit(limit);
        self
    }

    // ---- Read access ----

    pub fn forms(&self) -> &[Form] {
        &self.state.forms
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.state.forms.iter().find(|f| f.id == id)
    }

    /// Forms whose title or description contains `term`, ignoring case
    ///
    /// An empty term matches every form. Collection order is kept.
    pub fn search_forms(&self, term: &str) -> Vec<&Form> {
        let needle = term.to_lowercase();
        self.state
            .forms
            .iter()
            .filter(|form| {
                form.title.to_lowercase().contains(&needle)
                    || form
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn responses(&self) -> &[Response] {
        &self.state.responses
    }

    pub fn templates(&self) -> &[Template] {
        &self.state.templates
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.state.templates.iter().find(|t| t.id == id)
    }

    pub fn current_form(&self) -> Option<&Form> {
        self.current_form_id.as_deref().and_then(|id| self.form(id))
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_position(&self) -> Option<usize> {
        self.history.position()
    }

    /// Error from the most recent failed save, cleared by the next successful one
    pub fn persist_error(&self) -> Option<&StorageError> {
        self.persist_error.as_ref()
    }

    // ---- Form management ----

    /// Create an empty form, make it current and return its id
    pub fn create_form(&mut self, title: &str) -> String {
        let id = new_id();
        let form = Form::new(id.clone(), title);

        self.history.reset(form.clone());
        self.state.forms.insert(0, form);
        self.current_form_id = Some(id.clone());
        tracing::debug!("Created form {id}");

        self.persist();
        id
    }

    /// Merge `updates` into the form with `id`; does not checkpoint history
    pub fn update_form(&mut self, id: &str, updates: FormUpdate) {
        let Some(form) = self.state.forms.iter_mut().find(|f| f.id == id) else {
            tracing::debug!("update_form: no form with id {id}");
            return;
        };
        updates.apply(form);
        form.touch();
        self.persist();
    }

    /// Remove a form together with all of its responses
    pub fn delete_form(&mut self, id: &str) {
        let forms_before = self.state.forms.len();
        let responses_before = self.state.responses.len();

        self.state.forms.retain(|f| f.id != id);
        self.state.responses.retain(|r| r.form_id != id);

        if self.current_form_id.as_deref() == Some(id) {
            self.current_form_id = None;
            self.history.clear();
        }

        let removed_forms = forms_before - self.state.forms.len();
        let removed_responses = responses_before - self.state.responses.len();
        if removed_forms == 0 && removed_responses == 0 {
            tracing::debug!("delete_form: nothing stored for id {id}");
            return;
        }
        tracing::debug!("Deleted form {id} and {removed_responses} response(s)");
        self.persist();
    }

    /// Replace the form being edited; history restarts from it
    ///
    /// The form is written into the collection, replacing the entry with the
    /// same id or becoming the first entry.
    pub fn set_current_form(&mut self, form: Option<Form>) {
        let Some(form) = form else {
            self.current_form_id = None;
            self.history.clear();
            return;
        };

        self.current_form_id = Some(form.id.clone());
        self.history.reset(form.clone());
        match self.state.forms.iter_mut().find(|f| f.id == form.id) {
            Some(existing) => *existing = form,
            None => self.state.forms.insert(0, form),
        }
        self.persist();
    }

    // ---- Field management ----

    /// Append a field to the current form and return its new id
    pub fn add_field(&mut self, draft: FieldDraft) -> Option<String> {
        let id = new_id();
        let mut field = draft.into_field(id.clone());
        field.step = field.step.map(|s| s.clamp(1, MAX_STEPS));

        let applied = self.mutate_current("add_field", |form| {
            form.fields.push(field);
            true
        });
        applied.then_some(id)
    }

    /// Merge `updates` into a field of the current form
    pub fn update_field(&mut self, id: &str, updates: FieldUpdate) {
        self.mutate_current("update_field", |form| {
            match form.fields.iter_mut().find(|f| f.id == id) {
                Some(field) => {
                    updates.apply(field);
                    true
                }
                None => {
                    tracing::debug!("update_field: no field with id {id}");
                    false
                }
            }
        });
    }

    pub fn delete_field(&mut self, id: &str) {
        self.mutate_current("delete_field", |form| {
            match form.fields.iter().position(|f| f.id == id) {
                Some(index) => {
                    form.fields.remove(index);
                    true
                }
                None => {
                    tracing::debug!("delete_field: no field with id {id}");
                    false
                }
            }
        });
    }

    /// Move the field at `from` so it ends up at `to`
    ///
    /// `from` past the end is rejected; `to` past the end is clamped to the
    /// last position.
    pub fn reorder_fields(&mut self, from: usize, to: usize) {
        self.mutate_current("reorder_fields", |form| {
            let len = form.fields.len();
            if from >= len {
                tracing::debug!("reorder_fields: index {from} out of range for {len} field(s)");
                return false;
            }
            let to = to.min(len - 1);
            if from == to {
                return false;
            }
            let field = form.fields.remove(from);
            form.fields.insert(to, field);
            true
        });
    }

    /// Apply `op` to the current form; on change, refresh it and checkpoint history
    fn mutate_current<F>(&mut self, op: &str, f: F) -> bool
    where
        F: FnOnce(&mut Form) -> bool,
    {
        let Some(id) = self.current_form_id.clone() else {
            tracing::debug!("{op}: no current form");
            return false;
        };
        let Some(form) = self.state.forms.iter_mut().find(|form| form.id == id) else {
            tracing::debug!("{op}: current form {id} is not stored");
            return false;
        };

        if !f(form) {
            return false;
        }
        form.sync_steps();
        form.touch();

        self.save_to_history();
        self.persist();
        true
    }

    // ---- Response management ----

    /// Record a submission; `data` is stored verbatim
    pub fn add_response(&mut self, form_id: &str, data: ResponseData) -> String {
        let response = Response {
            id: new_id(),
            form_id: form_id.to_string(),
            data,
            submitted_at: Utc::now(),
        };
        let id = response.id.clone();

        self.state.responses.insert(0, response);
        tracing::debug!("Recorded response {id} for form {form_id}");

        self.persist();
        id
    }

    /// Responses for `form_id`, most recent first
    pub fn form_responses(&self, form_id: &str) -> Vec<&Response> {
        self.state
            .responses
            .iter()
            .filter(|r| r.form_id == form_id)
            .collect()
    }

    // ---- History management ----

    /// Checkpoint the current form
    pub fn save_to_history(&mut self) {
        let Some(snapshot) = self.current_form().cloned() else {
            tracing::debug!("save_to_history: no current form");
            return;
        };
        self.history.push(snapshot);
    }

    pub fn undo(&mut self) {
        match self.history.undo().cloned() {
            Some(snapshot) => self.restore_snapshot(snapshot),
            None => tracing::debug!("undo: nothing to undo"),
        }
    }

    pub fn redo(&mut self) {
        match self.history.redo().cloned() {
            Some(snapshot) => self.restore_snapshot(snapshot),
            None => tracing::debug!("redo: nothing to redo"),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore_snapshot(&mut self, snapshot: Form) {
        match self.state.forms.iter_mut().find(|f| f.id == snapshot.id) {
            Some(form) => *form = snapshot,
            None => {
                tracing::warn!("History snapshot for missing form {}", snapshot.id);
                return;
            }
        }
        self.persist();
    }

    // ---- Template management ----

    /// Instantiate a template as a new current form and return its id
    pub fn load_template(&mut self, template_id: &str) -> Option<String> {
        let Some(template) = self.template(template_id) else {
            tracing::debug!("load_template: no template with id {template_id}");
            return None;
        };

        let id = new_id();
        let mut form = Form::new(id.clone(), &template.name);
        form.description = Some(template.description.clone());
        form.fields = template
            .fields
            .iter()
            .map(|field| field.with_id(new_id()))
            .collect();
        form.is_multi_step = form.fields.iter().any(|f| f.step_or_first() > 1);
        form.steps = form.max_field_step();

        self.history.reset(form.clone());
        self.state.forms.insert(0, form);
        self.current_form_id = Some(id.clone());
        tracing::debug!("Created form {id} from template {template_id}");

        self.persist();
        Some(id)
    }

    /// Save the current form's fields as a reusable template
    pub fn save_as_template(
        &mut self,
        name: &str,
        description: &str,
        category: &str,
    ) -> Option<String> {
        let Some(form) = self.current_form() else {
            tracing::debug!("save_as_template: no current form");
            return None;
        };

        let template = Template {
            id: new_id(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            fields: form.fields.clone(),
        };
        let id = template.id.clone();

        self.state.templates.insert(0, template);
        self.persist();
        Some(id)
    }

    // ---- Persistence ----

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        match storage.save(&self.state) {
            Ok(()) => self.persist_error = None,
            Err(err) => {
                tracing::warn!("Failed to persist form builder state: {err}");
                self.persist_error = Some(err);
            }
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStore")
            .field("forms", &self.state.forms.len())
            .field("responses", &self.state.responses.len())
            .field("templates", &self.state.templates.len())
            .field("current_form_id", &self.current_form_id)
            .field("history_len", &self.history.len())
            .field("persisted", &self.storage.is_some())
            .finish()
    }
}
