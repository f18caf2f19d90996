//! The projects page: controller plus the Add and Edit dialogs.

use projdesk_core::{Error, Project, ProjectId, Result};
use serde::{Deserialize, Serialize};

use crate::controller::ProjectsController;
use crate::modal::{ModalKind, ProjectModal, SaveOutcome};
use crate::view::PageView;

/// Page behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Seed the Edit dialog with the selected project's values.
    ///
    /// Off by default: the Edit dialog opens with whatever it held last.
    pub prefill_edit_form: bool,
}

/// A mounted projects page.
#[derive(Debug)]
pub struct ProjectsPage {
    controller: ProjectsController,
    add_modal: ProjectModal,
    edit_modal: ProjectModal,
    options: PageOptions,
    mounted: bool,
}

impl ProjectsPage {
    /// Creates an unmounted page with default options.
    pub fn new(controller: ProjectsController) -> Self {
        Self::with_options(controller, PageOptions::default())
    }

    /// Creates an unmounted page.
    pub fn with_options(controller: ProjectsController, options: PageOptions) -> Self {
        Self {
            controller,
            add_modal: ProjectModal::new(ModalKind::Add),
            edit_modal: ProjectModal::new(ModalKind::Edit),
            options,
            mounted: false,
        }
    }

    /// The controller behind this page.
    pub fn controller(&self) -> &ProjectsController {
        &self.controller
    }

    /// Page options.
    pub fn options(&self) -> PageOptions {
        self.options
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Performs the initial load.
    ///
    /// Only the first call loads; later calls return `Ok(())` immediately.
    /// Use [`refresh`](Self::refresh) to load again.
    pub async fn mount(&mut self) -> Result<()> {
        if self.mounted {
            tracing::debug!("Page already mounted");
            return Ok(());
        }
        self.mounted = true;
        self.controller.load().await
    }

    /// Reloads the user and project list.
    pub async fn refresh(&self) -> Result<()> {
        self.controller.load().await
    }

    fn require_manager(&self, action: &str) -> Result<()> {
        if self.controller.snapshot().can_manage() {
            Ok(())
        } else {
            tracing::warn!(action, "Action not permitted for current user");
            Err(Error::forbidden(action))
        }
    }

    // ------------------------------------------------------------------
    // Add
    // ------------------------------------------------------------------

    /// Opens the Add dialog.
    pub fn show_add_modal(&mut self) -> Result<()> {
        self.require_manager("add project")?;
        self.add_modal.open();
        Ok(())
    }

    /// Closes the Add dialog without submitting.
    pub fn close_add_modal(&mut self) {
        self.add_modal.close();
    }

    /// The Add dialog.
    pub fn add_modal(&self) -> &ProjectModal {
        &self.add_modal
    }

    /// The Add dialog, for editing its fields.
    pub fn add_modal_mut(&mut self) -> &mut ProjectModal {
        &mut self.add_modal
    }

    /// Submits the Add dialog.
    pub async fn save_add_modal(&mut self) -> SaveOutcome {
        let controller = &self.controller;
        let notifier = controller.notifier().as_ref();
        self.add_modal
            .save(notifier, |payload| controller.create(payload))
            .await
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    /// Selects a project and opens the Edit dialog.
    ///
    /// Returns `Ok(None)` without opening anything when the project is not
    /// in the loaded list.
    pub fn edit_project(&mut self, id: ProjectId) -> Result<Option<Project>> {
        self.require_manager("edit project")?;

        let Some(project) = self.controller.select_for_edit(id) else {
            return Ok(None);
        };

        if self.options.prefill_edit_form {
            self.edit_modal.open_with(project.to_payload());
        } else {
            self.edit_modal.open();
        }
        Ok(Some(project))
    }

    /// Closes the Edit dialog without submitting.
    pub fn close_edit_modal(&mut self) {
        self.edit_modal.close();
    }

    /// The Edit dialog.
    pub fn edit_modal(&self) -> &ProjectModal {
        &self.edit_modal
    }

    /// The Edit dialog, for editing its fields.
    pub fn edit_modal_mut(&mut self) -> &mut ProjectModal {
        &mut self.edit_modal
    }

    /// Submits the Edit dialog against the selected project.
    pub async fn save_edit_modal(&mut self) -> SaveOutcome {
        let controller = &self.controller;
        let notifier = controller.notifier().as_ref();
        self.edit_modal
            .save(notifier, |payload| controller.update(payload))
            .await
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// Deletes a project. There is no confirmation step.
    pub async fn delete_project(&self, id: ProjectId) -> Result<()> {
        self.require_manager("delete project")?;
        self.controller.delete(id).await
    }

    /// Builds the view model for the current state.
    pub fn render(&self) -> PageView {
        PageView::build(
            &self.controller.snapshot(),
            self.add_modal.view(),
            self.edit_modal.view(),
        )
    }
}
