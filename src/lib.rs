//! tsnew: scaffold a ready-to-use TypeScript project in the current directory.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{AppContext, commands::init};
use domain::ProjectName;
use services::{EmbeddedConfigStore, FilesystemProjectStore, NpmCommandAdapter, SystemIdentity};

pub use app::commands::InitOutcome;
pub use domain::AppError;

/// Initialize a TypeScript project in the current working directory.
///
/// `project_name` is the optional CLI argument; it is lower-cased before use
/// and defaults to `my-typescript-project`.
pub fn init(project_name: Option<&str>) -> Result<InitOutcome, AppError> {
    let root = std::env::current_dir()?;
    let ctx = AppContext::new(
        FilesystemProjectStore::new(root.clone()),
        EmbeddedConfigStore::new(),
        NpmCommandAdapter::new(root),
        SystemIdentity::new(),
    );

    let outcome = init::execute(&ctx, ProjectName::from_arg(project_name))?;
    println!(
        "Setup completed! Your project \"{}\" is ready in the current directory.",
        outcome.project_name
    );
    Ok(outcome)
}
