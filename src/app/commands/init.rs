//! Init command implementation.

use crate::app::AppContext;
use crate::domain::{AppError, DependencyKind, ProjectName};
use crate::ports::{ConfigTemplateStore, IdentitySource, PackageManager, ProjectStore};

const ENV_PLACEHOLDER: &str = "# Add your environment variables here\n";
const SOURCE_PLACEHOLDER_CONTENT: &str = "// Start your project here";

/// Result of a completed initialization.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub project_name: String,
    pub author: String,
}

/// Resolve the manifest author: version-control display name first, OS
/// account name otherwise. An empty account name passes through as-is.
fn resolve_author<I: IdentitySource>(identity: &I) -> String {
    identity.vcs_user_name().unwrap_or_else(|| identity.account_name())
}

/// Execute the init command.
///
/// Strictly sequential: guard, author resolution, external init, manifest
/// write, dependency installs, static files, source scaffold. A failure at
/// any step aborts the rest and leaves prior writes on disk.
pub fn execute<S, C, P, I>(
    ctx: &AppContext<S, C, P, I>,
    name: ProjectName,
) -> Result<InitOutcome, AppError>
where
    S: ProjectStore,
    C: ConfigTemplateStore,
    P: PackageManager,
    I: IdentitySource,
{
    if ctx.store().manifest_exists() {
        return Err(AppError::ManifestExists);
    }

    let manifest_template = ctx.configs().manifest_template()?;
    let typescript_config = ctx.configs().typescript_config()?;
    let ignore_config = ctx.configs().ignore_config()?;

    let author = resolve_author(ctx.identity());

    println!("Initializing npm in the current directory...");
    ctx.package_manager().init_manifest()?;

    // Last-writer-wins: the derived manifest replaces whatever init produced.
    println!("Updating package.json...");
    let manifest = manifest_template.derive(&name, &author);
    ctx.store().write_manifest(&manifest.to_pretty_json()?)?;

    println!("Installing dependencies...");
    for kind in [DependencyKind::Runtime, DependencyKind::Development] {
        let specifiers = manifest.specifiers(kind);
        if !specifiers.is_empty() {
            ctx.package_manager().install(&specifiers, kind)?;
        }
    }

    println!("Creating tsconfig.json...");
    ctx.store().write_typescript_config(&typescript_config.to_pretty_json()?)?;

    println!("Creating .gitignore...");
    ctx.store().write_ignore_file(&ignore_config.render())?;

    println!("Creating .env file...");
    ctx.store().write_env_file(ENV_PLACEHOLDER)?;

    println!("Setting up folder structure...");
    ctx.store().scaffold_source_dir(SOURCE_PLACEHOLDER_CONTENT)?;

    Ok(InitOutcome { project_name: name.to_string(), author })
}
