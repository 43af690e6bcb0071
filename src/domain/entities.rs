// Process-wide login state. At most one logical session exists at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

// Credentials submitted on login. Transient, never persisted.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Outcome of the gate check for one protected request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    Admit,
    Reject,
}
