use crate::utils::ArgumentMask;
use std::fmt::Display;

/// The status of a discussion game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The game is still running.
    Continue,
    /// The opponent ran out of moves.
    ProponentWin,
    /// The proponent ran out of moves.
    OpponentWin,
}

impl GameStatus {
    /// Returns `true` iff the game is over.
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Continue
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Continue => write!(f, "running"),
            GameStatus::ProponentWin => write!(f, "proponent wins"),
            GameStatus::OpponentWin => write!(f, "opponent wins"),
        }
    }
}

/// The player expected to move next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The proponent, who defends the claimed argument.
    Proponent,
    /// The opponent, who attacks it.
    Opponent,
}

impl Turn {
    pub(crate) fn player_name(&self) -> &'static str {
        match self {
            Turn::Proponent => "proponent",
            Turn::Opponent => "opponent",
        }
    }
}

/// The arguments committed by a player, in the order they were played.
#[derive(Debug, Clone)]
pub(crate) struct Commitments {
    ordered: Vec<usize>,
    mask: ArgumentMask,
}

impl Commitments {
    fn new(n_arguments: usize) -> Self {
        Self {
            ordered: vec![],
            mask: ArgumentMask::empty(n_arguments),
        }
    }

    pub(crate) fn commit(&mut self, index: usize) {
        if !self.mask.contains(index) {
            self.ordered.push(index);
            self.mask.insert(index);
        }
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.mask.contains(index)
    }

    pub(crate) fn as_slice(&self) -> &[usize] {
        &self.ordered
    }
}

/// The state of a discussion game.
///
/// Arguments are referred by their indices in the framework the game is played on.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) current_argument: usize,
    pub(crate) proponent_committed: Commitments,
    pub(crate) opponent_committed: Commitments,
    pub(crate) round: usize,
    pub(crate) turn: Turn,
    pub(crate) status: GameStatus,
}

impl GameState {
    pub(crate) fn new(n_arguments: usize, claimed: usize) -> Self {
        let mut proponent_committed = Commitments::new(n_arguments);
        proponent_committed.commit(claimed);
        Self {
            current_argument: claimed,
            proponent_committed,
            opponent_committed: Commitments::new(n_arguments),
            round: 0,
            turn: Turn::Proponent,
            status: GameStatus::Continue,
        }
    }

    /// Returns the index of the last argument played.
    ///
    /// Before the first move, this is the claimed argument.
    pub fn current_argument(&self) -> usize {
        self.current_argument
    }

    /// Returns the indices of the arguments committed by the proponent, in the order they were played.
    ///
    /// The claimed argument is committed from the start of the game.
    pub fn proponent_committed(&self) -> &[usize] {
        self.proponent_committed.as_slice()
    }

    /// Returns the indices of the arguments committed by the opponent, in the order they were played.
    pub fn opponent_committed(&self) -> &[usize] {
        self.opponent_committed.as_slice()
    }

    /// Returns the round number.
    ///
    /// The round is 0 until the proponent announces the claimed argument, and increases with each proponent move.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns the player expected to move next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the status of the game.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(3, 2);
        assert_eq!(2, state.current_argument());
        assert_eq!(&[2], state.proponent_committed());
        assert!(state.opponent_committed().is_empty());
        assert_eq!(0, state.round());
        assert_eq!(Turn::Proponent, state.turn());
        assert_eq!(GameStatus::Continue, state.status());
        assert!(!state.status().is_terminal());
    }

    #[test]
    fn test_commitments_keep_insertion_order() {
        let mut commitments = Commitments::new(4);
        commitments.commit(3);
        commitments.commit(0);
        commitments.commit(3);
        assert_eq!(&[3, 0], commitments.as_slice());
        assert!(commitments.contains(0));
        assert!(!commitments.contains(1));
    }
}
