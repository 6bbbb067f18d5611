mod fake_identity;
mod static_config_store;

pub use fake_identity::FakeIdentity;
pub use fake_package_manager::FakePackageManager;
pub use memory_project_store::MemoryProjectStore;
pub use static_config_store::StaticConfigStore;
