//! The Add and Edit project dialogs.
//!
//! Both dialogs share one contract: collect name, link, and additional
//! members, refuse to submit while any of them is empty, hand the payload to
//! a caller-supplied async submission function, and close once that
//! submission succeeds. A dialog never talks to the network itself.

use std::future::Future;

use projdesk_core::validation::{MISSING_FIELDS_MESSAGE, missing_fields};
use projdesk_core::{Field, ProjectPayload, Result};

use crate::notify::{Notification, Notifier};
use crate::view::{FormFieldView, ModalView};

/// Which dialog this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Create a project.
    Add,
    /// Overwrite the selected project.
    Edit,
}

impl ModalKind {
    /// Dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Add => "Add New Project",
            ModalKind::Edit => "Edit Project",
        }
    }
}

/// Result of pressing "Save Project".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing was submitted; these fields are empty.
    Invalid(Vec<Field>),
    /// The submission succeeded and the dialog closed.
    Submitted,
    /// The submission failed; the dialog stays open.
    Failed,
}

impl SaveOutcome {
    /// Returns `true` if the submission succeeded.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SaveOutcome::Submitted)
    }
}

/// A project form dialog.
///
/// Field values survive closing and reopening; call
/// [`reset`](ProjectModal::reset) to clear them.
#[derive(Debug, Clone)]
pub struct ProjectModal {
    kind: ModalKind,
    visible: bool,
    payload: ProjectPayload,
}

impl ProjectModal {
    /// Creates a hidden, empty dialog.
    pub fn new(kind: ModalKind) -> Self {
        Self {
            kind,
            visible: false,
            payload: ProjectPayload::default(),
        }
    }

    /// Which dialog this is.
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    /// Whether the dialog is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows the dialog, keeping the current field values.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Shows the dialog with the given field values.
    pub fn open_with(&mut self, payload: ProjectPayload) {
        self.payload = payload;
        self.visible = true;
    }

    /// Hides the dialog.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.payload = ProjectPayload::default();
    }

    /// Current field values.
    pub fn payload(&self) -> &ProjectPayload {
        &self.payload
    }

    /// Current value of one field.
    pub fn field(&self, field: Field) -> &str {
        field.value(&self.payload)
    }

    /// Replaces the value of one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        field.set(&mut self.payload, value.into());
    }

    /// Sets the project name.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_field(Field::Name, value);
    }

    /// Sets the project link.
    pub fn set_link(&mut self, value: impl Into<String>) {
        self.set_field(Field::Link, value);
    }

    /// Sets the additional members.
    pub fn set_additional_members(&mut self, value: impl Into<String>) {
        self.set_field(Field::AdditionalMembers, value);
    }

    /// Validates the form and submits it.
    ///
    /// With any field empty, `notifier` receives the validation message and
    /// `submit` is not called. Otherwise `submit` gets a copy of the fields;
    /// the dialog closes if it returns `Ok`.
    pub async fn save<F, Fut>(&mut self, notifier: &dyn Notifier, submit: F) -> SaveOutcome
    where
        F: FnOnce(ProjectPayload) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let missing = missing_fields(&self.payload);
        if !missing.is_empty() {
            tracing::debug!(dialog = self.kind.title(), ?missing, "Form incomplete");
            notifier.notify(Notification::error(MISSING_FIELDS_MESSAGE));
            return SaveOutcome::Invalid(missing);
        }

        match submit(self.payload.clone()).await {
            Ok(()) => {
                self.close();
                SaveOutcome::Submitted
            }
            Err(_) => SaveOutcome::Failed,
        }
    }

    /// View model of the dialog.
    pub fn view(&self) -> ModalView {
        ModalView {
            title: self.kind.title(),
            visible: self.visible,
            fields: Field::ALL
                .into_iter()
                .map(|field| FormFieldView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    value: self.field(field).to_string(),
                })
                .collect(),
            buttons: ["Close", "Save Project"],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use projdesk_core::Error;
    use std::cell::Cell;

    fn filled(kind: ModalKind) -> ProjectModal {
        let mut modal = ProjectModal::new(kind);
        modal.open();
        modal.set_name("Alpha");
        modal.set_link("http://a");
        modal.set_additional_members("Bob");
        modal
    }

    #[tokio::test]
    async fn test_empty_field_blocks_submission() {
        for field in Field::ALL {
            let notifier = RecordingNotifier::new();
            let mut modal = filled(ModalKind::Add);
            modal.set_field(field, "");

            let called = Cell::new(false);
            let outcome = modal
                .save(&notifier, |_| {
                    called.set(true);
                    async { Ok(()) }
                })
                .await;

            assert_eq!(outcome, SaveOutcome::Invalid(vec![field]));
            assert!(!called.get(), "submitted with empty {field}");
            assert_eq!(notifier.messages(), vec!["Please fill in all fields."]);
            assert!(modal.is_visible());
        }
    }

    #[tokio::test]
    async fn test_successful_save_closes() {
        let notifier = RecordingNotifier::new();
        let mut modal = filled(ModalKind::Edit);

        let outcome = modal
            .save(&notifier, |payload| async move {
                assert_eq!(payload, ProjectPayload::new("Alpha", "http://a", "Bob"));
                Ok(())
            })
            .await;

        assert!(outcome.is_submitted());
        assert!(!modal.is_visible());
        assert!(notifier.all().is_empty());
        assert_eq!(modal.field(Field::Name), "Alpha");
    }

    #[tokio::test]
    async fn test_failed_save_stays_open() {
        let notifier = RecordingNotifier::new();
        let mut modal = filled(ModalKind::Edit);

        let outcome = modal
            .save(&notifier, |_| async { Err(Error::unreachable("down")) })
            .await;

        assert_eq!(outcome, SaveOutcome::Failed);
        assert!(modal.is_visible());
    }

    #[test]
    fn test_open_with_and_reset() {
        let mut modal = ProjectModal::new(ModalKind::Edit);
        modal.open_with(ProjectPayload::new("A", "l", "m"));
        assert!(modal.is_visible());
        assert_eq!(modal.payload(), &ProjectPayload::new("A", "l", "m"));

        modal.close();
        modal.open();
        assert_eq!(modal.field(Field::Link), "l");

        modal.reset();
        assert_eq!(modal.payload(), &ProjectPayload::default());
    }

    #[test]
    fn test_view() {
        let view = filled(ModalKind::Add).view();
        assert_eq!(view.title, "Add New Project");
        assert!(view.visible);
        assert_eq!(view.fields[0].label, "Project Name");
        assert_eq!(view.fields[2].value, "Bob");
        assert_eq!(view.buttons, ["Close", "Save Project"]);
    }
}
