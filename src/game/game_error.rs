use crate::aa::FrameworkError;
use thiserror::Error;

/// Errors raised while playing a discussion game.
///
/// Move errors ([`InvalidMove`](GameError::InvalidMove), [`IllegalMove`](GameError::IllegalMove), [`RepeatedMove`](GameError::RepeatedMove))
/// are local to a round and leave the game untouched, so the move can be asked again.
/// The other errors end the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game cannot be built on the framework.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
    /// The candidate is not an argument of the framework.
    #[error("invalid move: {0} is not an argument")]
    InvalidMove(String),
    /// The candidate does not satisfy the legality rules.
    #[error("illegal move: {candidate} {reason}")]
    IllegalMove {
        /// the candidate argument
        candidate: String,
        /// the rule the candidate breaks
        reason: String,
    },
    /// The candidate was already played by the opponent.
    #[error("repeated move: {0} was already played")]
    RepeatedMove(String),
    /// The move provider could not supply a move.
    #[error("no move could be read: {0}")]
    InputAborted(String),
    /// A move was requested after the end of the game.
    #[error("the game is over")]
    GameOver,
    /// A move was requested from the player that is not expected to play.
    #[error("it is not the turn of the {0}")]
    OutOfTurn(&'static str),
}

impl GameError {
    /// Returns `true` iff the error is a rejected move after which the move can be asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InvalidMove(_) | GameError::IllegalMove { .. } | GameError::RepeatedMove(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(GameError::InvalidMove("z".to_string()).is_recoverable());
        assert!(GameError::RepeatedMove("a".to_string()).is_recoverable());
        assert!(!GameError::InputAborted("eof".to_string()).is_recoverable());
        assert!(!GameError::GameOver.is_recoverable());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            "illegal move: c does not attack a",
            GameError::IllegalMove {
                candidate: "c".to_string(),
                reason: "does not attack a".to_string()
            }
            .to_string()
        );
        assert_eq!(
            "no such argument: z",
            GameError::from(FrameworkError::UnknownArgument("z".to_string())).to_string()
        );
    }
}
