/// Outcome of one authentication decision.
///
/// Reasons are for logs only. Every `Rejected` maps to the same 401 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Admitted(Admission),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// No key configured; the filter is a no-op.
    Disabled,
    SkipPath,
    Credential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingCredential,
    UnknownCredential,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingCredential => "missing credential",
            Rejection::UnknownCredential => "unknown credential",
        }
    }
}
