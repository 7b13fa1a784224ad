//! Typed model of the form schema the assistant is asked to produce.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub placeholder: String,
    /// Choices for `select` fields only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Checkbox,
    Select,
    Textarea,
}

impl FormField {
    fn required(id: &str, field_type: FieldType, label: &str, placeholder: &str) -> Self {
        Self {
            id: id.to_string(),
            field_type,
            label: label.to_string(),
            required: true,
            placeholder: placeholder.to_string(),
            options: None,
        }
    }
}

impl FormSchema {
    /// Canned contact form served when no completion credential is configured.
    pub fn mock() -> Self {
        Self {
            title: "Contact Form".to_string(),
            fields: vec![
                FormField::required("name", FieldType::Text, "Full Name", "Enter your full name"),
                FormField::required("email", FieldType::Email, "Email Address", "Enter your email"),
                FormField::required(
                    "message",
                    FieldType::Textarea,
                    "Message",
                    "Enter your message",
                ),
            ],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
