//! Authorization Types
//!
//! Parameters for the browser-facing authorization request.

/// Parameters for login URL generation.
#[derive(Clone, Debug, Default)]
pub struct LoginUrlParams {
    /// Opaque anti-CSRF value, round-tripped untouched.
    pub state: String,
    /// Offer unauthenticated users the option to sign up.
    pub allow_signup: bool,
    /// Requested scopes, joined with single spaces.
    pub scopes: Vec<String>,
    /// Suggest a specific account to sign in with.
    pub login: Option<String>,
    /// Prompt behavior.
    pub prompt: Option<Prompt>,
}

impl LoginUrlParams {
    pub fn new(state: impl Into<String>, allow_signup: bool) -> Self {
        Self {
            state: state.into(),
            allow_signup,
            ..Default::default()
        }
    }

    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }
}

/// Authorization prompt behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Force the account picker even when a session exists.
    SelectAccount,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectAccount => "select_account",
        }
    }
}
