use crate::ports::IdentitySource;

/// Fake identity source with fixed answers.
#[derive(Default)]
pub struct FakeIdentity {
    pub vcs_name: Option<String>,
    pub account: String,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vcs_name(mut self, name: &str) -> Self {
        self.vcs_name = Some(name.to_string());
        self
    }

    pub fn with_account(mut self, name: &str) -> Self {
        self.account = name.to_string();
        self
    }
}

impl IdentitySource for FakeIdentity {
    fn vcs_user_name(&self) -> Option<String> {
        self.vcs_name.clone()
    }

    fn account_name(&self) -> String {
        self.account.clone()
    }
}
