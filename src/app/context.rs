use crate::ports::{ConfigTemplateStore, IdentitySource, PackageManager, ProjectStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S, C, P, I>
where
    S: ProjectStore,
    C: ConfigTemplateStore,
    P: PackageManager,
    I: IdentitySource,
{
    store: S,
    configs: C,
    package_manager: P,
    identity: I,
}

impl<S, C, P, I> AppContext<S, C, P, I>
where
    S: ProjectStore,
    C: ConfigTemplateStore,
    P: PackageManager,
    I: IdentitySource,
{
    /// Create a new application context.
    pub fn new(store: S, configs: C, package_manager: P, identity: I) -> Self {
        Self { store, configs, package_manager, identity }
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the config template store.
    pub fn configs(&self) -> &C {
        &self.configs
    }

    /// Get a reference to the package manager.
    pub fn package_manager(&self) -> &P {
        &self.package_manager
    }

    /// Get a reference to the identity source.
    pub fn identity(&self) -> &I {
        &self.identity
    }
}
