//! User-facing operations and their notification texts.

use std::fmt;

/// A controller operation, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Loading the user and project list.
    Fetch,
    /// Creating a project.
    Add,
    /// Updating the selected project.
    Update,
    /// Deleting a project.
    Delete,
}

impl Operation {
    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Fetch => "fetch",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Toast shown when the operation succeeds. Loads are silent.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Operation::Fetch => None,
            Operation::Add => Some("Project added successfully."),
            Operation::Update => Some("Project updated successfully."),
            Operation::Delete => Some("Project deleted successfully."),
        }
    }

    /// Toast shown for any failure of the operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Fetch => "Error fetching projects",
            Operation::Add => "Error adding project",
            Operation::Update => "Error updating project",
            Operation::Delete => "Error deleting project",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_is_silent_on_success() {
        assert_eq!(Operation::Fetch.success_message(), None);
        assert_eq!(Operation::Fetch.failure_message(), "Error fetching projects");
    }

    #[test]
    fn test_mutation_messages() {
        assert_eq!(
            Operation::Delete.success_message(),
            Some("Project deleted successfully.")
        );
        assert_eq!(Operation::Update.failure_message(), "Error updating project");
        assert_eq!(Operation::Add.to_string(), "add");
    }
}
