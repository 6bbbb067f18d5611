mod config_embedded;
mod npm_command;
mod project_filesystem;
mod system_identity;

pub use config_embedded::EmbeddedConfigStore;
pub use npm_command::NpmCommandAdapter;
pub use project_filesystem::FilesystemProjectStore;
pub use system_identity::SystemIdentity;
