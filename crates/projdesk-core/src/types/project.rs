//! Project records as exchanged with the projects service.

use serde::{Deserialize, Serialize};

use super::{ProjectId, UserId};

/// Shown in place of an empty `additionalMembers` value.
pub const NO_MEMBERS: &str = "None";

/// A tracked project as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend-assigned identifier
    pub id: ProjectId,

    /// Display label
    pub name: String,

    /// URI or other reference to the project
    pub link: String,

    /// User who created the project
    pub user_id: UserId,

    /// Free-text list of extra participants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_members: Option<String>,
}

impl Project {
    /// Returns the members text for display, or `"None"` when absent or empty.
    pub fn members_display(&self) -> &str {
        match self.additional_members.as_deref() {
            Some(members) if !members.is_empty() => members,
            _ => NO_MEMBERS,
        }
    }

    /// Returns the editable fields of this project.
    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.clone(),
            link: self.link.clone(),
            additional_members: self.additional_members.clone().unwrap_or_default(),
        }
    }
}

/// The user-editable fields of a project, as collected by a form.
///
/// This is also the body of an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Display label
    pub name: String,

    /// URI or other reference to the project
    pub link: String,

    /// Free-text list of extra participants
    pub additional_members: String,
}

impl ProjectPayload {
    /// Creates a payload from its three fields.
    pub fn new(
        name: impl Into<String>,
        link: impl Into<String>,
        additional_members: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
            additional_members: additional_members.into(),
        }
    }
}

/// Body of a create request: the form payload stamped with the creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Fields entered by the user
    #[serde(flatten)]
    pub payload: ProjectPayload,

    /// Creator, taken from the verified session
    pub user_id: UserId,
}

impl NewProject {
    /// Stamps a payload with the creating user.
    pub fn new(payload: ProjectPayload, user_id: UserId) -> Self {
        Self { payload, user_id }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alpha() -> Project {
        Project {
            id: ProjectId::new(1),
            name: "Alpha".to_string(),
            link: "http://a".to_string(),
            user_id: UserId::new(7),
            additional_members: Some("Bob".to_string()),
        }
    }

    #[test]
    fn test_project_deserializes_camel_case() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "name": "Alpha",
            "link": "http://a",
            "userId": 7,
            "additionalMembers": "Bob"
        }))
        .unwrap();
        assert_eq!(project, alpha());
    }

    #[test]
    fn test_project_without_members() {
        let project: Project = serde_json::from_value(json!({
            "id": 2,
            "name": "Beta",
            "link": "http://b",
            "userId": 7,
            "createdAt": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(project.additional_members, None);
        assert_eq!(project.members_display(), "None");
    }

    #[test]
    fn test_members_display_empty_and_null() {
        let mut project = alpha();
        project.additional_members = Some(String::new());
        assert_eq!(project.members_display(), NO_MEMBERS);

        let project: Project = serde_json::from_value(json!({
            "id": 3, "name": "C", "link": "l", "userId": 1, "additionalMembers": null
        }))
        .unwrap();
        assert_eq!(project.members_display(), NO_MEMBERS);
        assert_eq!(alpha().members_display(), "Bob");
    }

    #[test]
    fn test_to_payload() {
        let payload = alpha().to_payload();
        assert_eq!(payload, ProjectPayload::new("Alpha", "http://a", "Bob"));
    }

    #[test]
    fn test_update_body_has_no_user_id() {
        let value = serde_json::to_value(ProjectPayload::new("A", "l", "m")).unwrap();
        assert_eq!(
            value,
            json!({"name": "A", "link": "l", "additionalMembers": "m"})
        );
    }

    #[test]
    fn test_create_body_is_flat() {
        let body = NewProject::new(ProjectPayload::new("A", "l", "m"), UserId::new(7));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({"name": "A", "link": "l", "additionalMembers": "m", "userId": 7})
        );
    }
}
