use crate::domain::{AppError, DependencyKind, Specifier};

/// External package manager operations.
///
/// Output of every invocation stays attached to the controlling terminal;
/// nothing is captured or parsed.
pub trait PackageManager {
    /// Run the package manager's own manifest init.
    fn init_manifest(&self) -> Result<(), AppError>;

    /// Install the given specifiers in a single invocation.
    ///
    /// Callers skip the call entirely for an empty list; adapters may assume
    /// `specifiers` is non-empty.
    fn install(&self, specifiers: &[Specifier], kind: DependencyKind) -> Result<(), AppError>;
}
