//! mc-cli library
//!
//! Exports the collaborator client and the dashboard dispatcher for the `mcdash`
//! binary, tests, and embedders.

pub mod clipboard;
pub(crate) mod client;
pub mod confirm;
pub(crate) mod dispatcher;
pub mod logger;
pub mod notify;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, ProvisionedServer};
pub use clipboard::{
    Clipboard, ClipboardError, ClipboardResult, ClipboardWriter, ScratchFileClipboard,
    SystemClipboard,
};
pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use dispatcher::{DashboardError, DashboardResult, Dispatcher};
pub use notify::{ConsoleNotifier, MemoryNotifier, Notification, Notifier, Variant};
pub use session::Session;
