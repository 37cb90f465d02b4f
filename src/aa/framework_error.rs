use thiserror::Error;

/// Structural errors raised while building or querying an [`AAFramework`](super::AAFramework).
///
/// These errors are not recoverable: they abort before any game starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkError {
    /// An attack refers to an identifier that is not declared as an argument.
    #[error("attack from {attacker} to {attacked} refers to an unknown argument")]
    InvalidReference {
        /// the attacker identifier
        attacker: String,
        /// the attacked identifier
        attacked: String,
    },
    /// An identifier does not match any argument.
    #[error("no such argument: {0}")]
    UnknownArgument(String),
}
