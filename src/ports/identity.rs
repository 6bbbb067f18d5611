/// Ambient identity used to resolve the manifest author.
pub trait IdentitySource {
    /// Display name from version-control configuration.
    ///
    /// Best effort: a missing binary, unset key, non-zero exit, or empty
    /// value all yield `None`, never an error.
    fn vcs_user_name(&self) -> Option<String>;

    /// OS account name of the invoking user, empty when undeterminable.
    fn account_name(&self) -> String;
}
