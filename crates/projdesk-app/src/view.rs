//! View model of the projects page.
//!
//! A [`PageView`] is a plain data tree describing what the page shows. Front
//! ends render it however they like; its `Display` implementation is the
//! plain-text rendering used by the CLI.

use std::fmt;

use projdesk_core::{Field, Project, ProjectId};

use crate::store::StoreSnapshot;

/// Page heading.
pub const PAGE_TITLE: &str = "Projects List";

/// What a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Open the Add modal.
    AddProject,
    /// Select a project and open the Edit modal.
    EditProject(ProjectId),
    /// Delete a project.
    DeleteProject(ProjectId),
}

impl ActionKind {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::AddProject => "Add New Project",
            ActionKind::EditProject(_) => "Edit Project",
            ActionKind::DeleteProject(_) => "Delete Project",
        }
    }

    /// Button style.
    pub fn variant(&self) -> &'static str {
        match self {
            ActionKind::AddProject => "primary",
            ActionKind::EditProject(_) => "warning",
            ActionKind::DeleteProject(_) => "danger",
        }
    }
}

/// A button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// What the button does
    pub kind: ActionKind,
    /// Button text
    pub label: &'static str,
    /// Button style
    pub variant: &'static str,
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            variant: kind.variant(),
        }
    }
}

/// One `label: value` line of a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    /// Line label
    pub label: &'static str,
    /// Line value
    pub value: String,
}

impl CardLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One collapsible entry of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    /// Stable key (the project id)
    pub key: String,
    /// Collapsed heading
    pub header: String,
    /// Card lines shown when expanded
    pub lines: Vec<CardLine>,
    /// Edit and delete buttons, when permitted
    pub actions: Vec<Action>,
}

impl AccordionItem {
    fn for_project(project: &Project, can_manage: bool) -> Self {
        let actions = if can_manage {
            vec![
                ActionKind::EditProject(project.id).into(),
                ActionKind::DeleteProject(project.id).into(),
            ]
        } else {
            Vec::new()
        };

        Self {
            key: project.id.to_string(),
            header: project.name.clone(),
            lines: vec![
                CardLine::new("Id", project.id.to_string()),
                CardLine::new("Link", project.link.clone()),
                CardLine::new("Created By (userId)", project.user_id.to_string()),
                CardLine::new("Other Members", project.members_display()),
            ],
            actions,
        }
    }

    /// Looks up a card line by label.
    pub fn line(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// One input of a modal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    /// Which field
    pub field: Field,
    /// Input label
    pub label: &'static str,
    /// Input placeholder
    pub placeholder: &'static str,
    /// Current value
    pub value: String,
}

/// A modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// Dialog title
    pub title: &'static str,
    /// Whether the dialog is shown
    pub visible: bool,
    /// Form inputs
    pub fields: Vec<FormFieldView>,
    /// Footer buttons
    pub buttons: [&'static str; 2],
}

/// Everything the projects page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Page heading
    pub title: &'static str,
    /// "Add New Project", when permitted
    pub add_action: Option<Action>,
    /// Project list
    pub items: Vec<AccordionItem>,
    /// Add dialog
    pub add_modal: ModalView,
    /// Edit dialog
    pub edit_modal: ModalView,
}

impl PageView {
    /// Builds the view for a store snapshot and the two dialogs.
    pub fn build(snapshot: &StoreSnapshot, add_modal: ModalView, edit_modal: ModalView) -> Self {
        let can_manage = snapshot.can_manage();
        Self {
            title: PAGE_TITLE,
            add_action: can_manage.then(|| ActionKind::AddProject.into()),
            items: snapshot
                .projects
                .iter()
                .map(|project| AccordionItem::for_project(project, can_manage))
                .collect(),
            add_modal,
            edit_modal,
        }
    }

    /// Looks up a list item by project id.
    pub fn item(&self, id: ProjectId) -> Option<&AccordionItem> {
        let key = id.to_string();
        self.items.iter().find(|item| item.key == key)
    }

    /// Returns `true` if any add, edit, or delete button is shown.
    pub fn has_write_controls(&self) -> bool {
        self.add_action.is_some() || self.items.iter().any(|item| !item.actions.is_empty())
    }
}

fn write_actions(f: &mut fmt::Formatter<'_>, indent: &str, actions: &[Action]) -> fmt::Result {
    if actions.is_empty() {
        return Ok(());
    }
    let buttons: Vec<String> = actions.iter().map(|a| format!("[{}]", a.label)).collect();
    writeln!(f, "{indent}{}", buttons.join(" "))
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "┌ {}", self.title)?;
        for field in &self.fields {
            let value = if field.value.is_empty() {
                format!("<{}>", field.placeholder)
            } else {
                field.value.clone()
            };
            writeln!(f, "│ {}: {value}", field.label)?;
        }
        writeln!(f, "└ [{}] [{}]", self.buttons[0], self.buttons[1])
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if let Some(action) = &self.add_action {
            write_actions(f, "", std::slice::from_ref(action))?;
        }

        if self.items.is_empty() {
            writeln!(f)?;
            writeln!(f, "(no projects)")?;
        }

        for item in &self.items {
            writeln!(f)?;
            writeln!(f, "▸ {}", item.header)?;
            for line in &item.lines {
                writeln!(f, "  {}: {}", line.label, line.value)?;
            }
            write_actions(f, "  ", &item.actions)?;
        }

        for modal in [&self.add_modal, &self.edit_modal] {
            if modal.visible {
                writeln!(f)?;
                write!(f, "{modal}")?;
            }
        }

        Ok(())
    }
}
