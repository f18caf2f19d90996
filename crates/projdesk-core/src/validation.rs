//! Presence checks for project forms.

use std::fmt;

use crate::types::ProjectPayload;

/// Message shown when a form is submitted with an empty field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// A field of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Project name
    Name,
    /// Project link
    Link,
    /// Additional members
    AdditionalMembers,
}

impl Field {
    /// All form fields, in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Link, Field::AdditionalMembers];

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Project Name",
            Field::Link => "Project Link",
            Field::AdditionalMembers => "Additional Members",
        }
    }

    /// Input placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter project name",
            Field::Link => "Enter project link",
            Field::AdditionalMembers => "Enter additional members",
        }
    }

    /// JSON key of the field.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Link => "link",
            Field::AdditionalMembers => "additionalMembers",
        }
    }

    /// Reads this field from a payload.
    pub fn value<'a>(&self, payload: &'a ProjectPayload) -> &'a str {
        match self {
            Field::Name => &payload.name,
            Field::Link => &payload.link,
            Field::AdditionalMembers => &payload.additional_members,
        }
    }

    /// Writes this field into a payload.
    pub fn set(&self, payload: &mut ProjectPayload, value: String) {
        match self {
            Field::Name => payload.name = value,
            Field::Link => payload.link = value,
            Field::AdditionalMembers => payload.additional_members = value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the empty fields of a payload, in display order.
///
/// Whitespace counts as content; only zero-length values are missing.
pub fn missing_fields(payload: &ProjectPayload) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| field.value(payload).is_empty())
        .collect()
}
