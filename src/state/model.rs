//! Form builder domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Highest step a field can be assigned to on a multi-step form
pub const MAX_STEPS: u32 = 5;

/// Input element kinds a field can render as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    Email,
    Phone,
    Number,
    File,
}

impl FieldKind {
    /// All kinds in palette order
    pub const ALL: [FieldKind; 10] = [
        Self::Text,
        Self::Textarea,
        Self::Select,
        Self::Checkbox,
        Self::Radio,
        Self::Date,
        Self::Email,
        Self::Phone,
        Self::Number,
        Self::File,
    ];

    /// Palette label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Textarea => "Textarea",
            Self::Select => "Dropdown",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Button",
            Self::Date => "Date Picker",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Number => "Number",
            Self::File => "File Upload",
        }
    }

    /// Whether the kind picks from a list of options
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Checkbox | Self::Radio)
    }
}

/// Length and pattern constraints checked when a form is filled in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// One input element definition within a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

impl Field {
    /// Step this field belongs to, treating a missing step as the first
    pub fn step_or_first(&self) -> u32 {
        self.step.unwrap_or(1)
    }

    /// Copy of this field under a new id
    pub fn with_id(&self, id: String) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

/// A field definition that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub kind: FieldKind,
    pub label: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub help_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub validation: Option<Validation>,
    pub step: Option<u32>,
}

impl FieldDraft {
    /// Bare draft with only a kind and a label
    pub fn new(kind: FieldKind, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            placeholder: None,
            required: false,
            help_text: None,
            options: None,
            validation: None,
            step: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }

    /// Attach an id, producing a complete field
    pub fn into_field(self, id: String) -> Field {
        Field {
            id,
            kind: self.kind,
            label: self.label,
            placeholder: self.placeholder,
            required: self.required,
            help_text: self.help_text,
            options: self.options,
            validation: self.validation,
            step: self.step,
        }
    }
}

/// Partial update merged into an existing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub kind: Option<FieldKind>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub help_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub validation: Option<Validation>,
    pub step: Option<u32>,
}

impl FieldUpdate {
    /// Merge the set values into `field`
    pub fn apply(self, field: &mut Field) {
        if let Some(kind) = self.kind {
            field.kind = kind;
        }
        if let Some(label) = self.label {
            field.label = label;
        }
        if let Some(placeholder) = self.placeholder {
            field.placeholder = Some(placeholder);
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(help_text) = self.help_text {
            field.help_text = Some(help_text);
        }
        if let Some(options) = self.options {
            field.options = Some(options);
        }
        if let Some(validation) = self.validation {
            field.validation = Some(validation);
        }
        if let Some(step) = self.step {
            field.step = Some(step.clamp(1, MAX_STEPS));
        }
    }
}

/// A named, ordered collection of fields plus metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub is_multi_step: bool,
    #[serde(default = "default_steps")]
    pub steps: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_steps() -> u32 {
    1
}

impl Form {
    /// Empty single-step form
    pub fn new(id: String, title: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.to_string(),
            description: Some(String::new()),
            fields: Vec::new(),
            is_multi_step: false,
            steps: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Largest step assigned to any field (at least 1)
    pub fn max_field_step(&self) -> u32 {
        self.fields
            .iter()
            .map(Field::step_or_first)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Re-derive `steps` from the field list when the form is multi-step
    pub fn sync_steps(&mut self) {
        if self.is_multi_step {
            self.steps = self.max_field_step();
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial update merged into an existing form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<Field>>,
    pub is_multi_step: Option<bool>,
    pub steps: Option<u32>,
}

impl FormUpdate {
    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    /// Merge the set values into `form`
    ///
    /// Field steps are clamped to `1..=MAX_STEPS`; on a multi-step form
    /// `steps` always ends up equal to the largest field step.
    pub fn apply(self, form: &mut Form) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = Some(description);
        }
        if let Some(mut fields) = self.fields {
            for field in &mut fields {
                field.step = field.step.map(|s| s.clamp(1, MAX_STEPS));
            }
            form.fields = fields;
        }
        if let Some(steps) = self.steps {
            form.steps = steps.max(1);
        }
        if let Some(is_multi_step) = self.is_multi_step {
            form.is_multi_step = is_multi_step;
        }
        form.sync_steps();
    }
}

/// Submitted value for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// Get the text value (returns None for list values)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// Character length for text, item count for lists
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            FieldValue::List(items) => items.len(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Submitted values keyed by field id
pub type ResponseData = HashMap<String, FieldValue>;

/// One end-user submission against a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: String,
    pub form_id: String,
    pub data: ResponseData,
    pub submitted_at: DateTime<Utc>,
}

/// A reusable, form-independent field set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub fields: Vec<Field>,
}
