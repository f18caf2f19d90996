//! # projdesk-app
//!
//! The projects page, independent of any particular front end.
//!
//! - [`ProjectStore`]: shared snapshot of the session user and project list
//! - [`ProjectsController`]: load and mutation flows against a
//!   [`ProjectsBackend`](projdesk_core::ProjectsBackend)
//! - [`ProjectModal`]: the Add and Edit forms
//! - [`ProjectsPage`]: composes the above and renders a [`PageView`]
//! - [`Notifier`]: where success and failure toasts go

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod modal;
pub mod notify;
pub mod operation;
pub mod page;
pub mod store;
pub mod view;

pub use controller::ProjectsController;
pub use modal::{ModalKind, ProjectModal, SaveOutcome};
pub use notify::{Level, Notification, Notifier, RecordingNotifier};
pub use operation::Operation;
pub use page::{PageOptions, ProjectsPage};
pub use store::{LoadTicket, ProjectStore, StoreSnapshot};
pub use view::{AccordionItem, Action, ActionKind, CardLine, ModalView, PageView};
