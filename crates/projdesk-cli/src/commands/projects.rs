//! Handlers for the project commands.
//!
//! Each handler mounts the page, performs one page action, and returns the
//! resulting view for the caller to print. Notifications go through the
//! page's notifier as the action runs.

use std::sync::Arc;

use projdesk_app::{PageView, ProjectsController, ProjectsPage};
use projdesk_client::{HttpSessionVerifier, ProjdeskClient};
use projdesk_core::{Field, ProjectId, SessionVerifier, StaticSessionVerifier};

use crate::config::ProjdeskConfig;
use crate::error::{Error, Result};
use crate::terminal::TerminalNotifier;

/// Picks the session verifier for a configuration.
///
/// A token means the verification endpoint; otherwise a configured user id
/// is trusted as is. With neither, every load fails with a session error.
pub fn session_verifier(
    config: &ProjdeskConfig,
    client: &ProjdeskClient,
) -> Arc<dyn SessionVerifier> {
    match (&config.session.token, config.session.user_id) {
        (Some(token), _) => {
            tracing::debug!(verify_path = %config.session.verify_path, "Verifying session token");
            Arc::new(HttpSessionVerifier::new(
                client,
                &config.session.verify_path,
                token.clone(),
            ))
        }
        (None, Some(user_id)) => {
            tracing::debug!(%user_id, "Using configured user id");
            Arc::new(StaticSessionVerifier::new(user_id))
        }
        (None, None) => {
            tracing::warn!("Neither session.token nor session.user_id is configured");
            Arc::new(StaticSessionVerifier::signed_out())
        }
    }
}

/// Builds a page wired to the projects service and the terminal.
pub fn build_page(config: &ProjdeskConfig) -> Result<ProjectsPage> {
    let client = ProjdeskClient::new(&config.api)?;
    let verifier = session_verifier(config, &client);
    let controller =
        ProjectsController::new(Arc::new(client), verifier, Arc::new(TerminalNotifier));
    Ok(ProjectsPage::with_options(controller, config.ui))
}

/// `projdesk list`
pub async fn cmd_list(page: &mut ProjectsPage) -> Result<PageView> {
    page.mount().await?;
    Ok(page.render())
}

/// `projdesk add`
///
/// Missing fields are submitted empty, so the form's own validation rejects
/// them.
pub async fn cmd_add(
    page: &mut ProjectsPage,
    name: Option<String>,
    link: Option<String>,
    members: Option<String>,
) -> Result<PageView> {
    page.mount().await?;
    page.show_add_modal()?;

    let modal = page.add_modal_mut();
    modal.set_name(name.unwrap_or_default());
    modal.set_link(link.unwrap_or_default());
    modal.set_additional_members(members.unwrap_or_default());

    let outcome = page.save_add_modal().await;
    let view = page.render();
    if outcome.is_submitted() {
        Ok(view)
    } else {
        print!("{view}");
        Err(Error::ActionFailed("Add project"))
    }
}

/// `projdesk edit`
///
/// Only the given fields are set on the Edit form; the rest keep whatever
/// the form opened with.
pub async fn cmd_edit(
    page: &mut ProjectsPage,
    id: ProjectId,
    name: Option<String>,
    link: Option<String>,
    members: Option<String>,
) -> Result<PageView> {
    page.mount().await?;
    if page.edit_project(id)?.is_none() {
        return Err(Error::ProjectNotListed(id));
    }

    let modal = page.edit_modal_mut();
    for (field, value) in [
        (Field::Name, name),
        (Field::Link, link),
        (Field::AdditionalMembers, members),
    ] {
        if let Some(value) = value {
            modal.set_field(field, value);
        }
    }

    let outcome = page.save_edit_modal().await;
    let view = page.render();
    if outcome.is_submitted() {
        Ok(view)
    } else {
        print!("{view}");
        Err(Error::ActionFailed("Edit project"))
    }
}

/// `projdesk delete`
pub async fn cmd_delete(page: &mut ProjectsPage, id: ProjectId) -> Result<PageView> {
    page.mount().await?;
    if page.render().item(id).is_none() {
        return Err(Error::ProjectNotListed(id));
    }
    page.delete_project(id).await?;
    Ok(page.render())
}
