use super::{GameError, GameStatus};
use crate::aa::{Argument, ArgumentId};
use std::collections::VecDeque;

/// The information given to a [`MoveProvider`] when the opponent has to play.
#[derive(Debug)]
pub struct MovePrompt<'p, T>
where
    T: ArgumentId,
{
    pub(crate) round: usize,
    pub(crate) current_argument: &'p Argument<T>,
    pub(crate) legal_moves: Vec<&'p Argument<T>>,
}

impl<'p, T> MovePrompt<'p, T>
where
    T: ArgumentId,
{
    /// Returns the current round.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns the argument the opponent must react to.
    pub fn current_argument(&self) -> &'p Argument<T> {
        self.current_argument
    }

    /// Returns the moves the opponent is allowed to play.
    pub fn legal_moves(&self) -> &[&'p Argument<T>] {
        &self.legal_moves
    }
}

/// A source of opponent moves, such as a human at a terminal or a script.
pub trait MoveProvider<T>
where
    T: ArgumentId,
{
    /// Returns the identifier of the argument the opponent plays.
    ///
    /// An [`InputAborted`](GameError::InputAborted) error stops the game.
    fn choose_move(&mut self, prompt: &MovePrompt<T>) -> Result<T, GameError>;

    /// Called when the last move returned by [`choose_move`](Self::choose_move) was rejected.
    ///
    /// The move is asked again after this call.
    fn move_rejected(&mut self, _error: &GameError) {}
}

/// A [`MoveProvider`] playing a fixed sequence of moves.
///
/// Requesting a move after the sequence is exhausted results in an [`InputAborted`](GameError::InputAborted) error.
///
/// # Example
///
/// ```
/// # use argame::aa::{AAFramework, ArgumentSet};
/// # use argame::game::{DiscussionGame, GameRules, GameStatus, ScriptedMoveProvider};
/// let af = AAFramework::new_with_argument_set(
///     ArgumentSet::new_with_ids(&["a0", "a1", "a2"]),
///     &[("a2", "a1"), ("a1", "a0")],
/// ).unwrap();
/// let mut game = DiscussionGame::new(&af, &"a0", GameRules::preferred()).unwrap();
/// let mut provider = ScriptedMoveProvider::new(vec!["a1"]);
/// assert_eq!(GameStatus::ProponentWin, game.play(&mut provider).unwrap());
/// ```
#[derive(Debug)]
pub struct ScriptedMoveProvider<T> {
    moves: VecDeque<T>,
    rejections: Vec<GameError>,
}

impl<T> ScriptedMoveProvider<T> {
    /// Builds a provider playing the given moves in order.
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            moves: moves.into_iter().collect(),
            rejections: vec![],
        }
    }

    /// Returns the errors raised by the rejected moves.
    pub fn rejections(&self) -> &[GameError] {
        &self.rejections
    }
}

impl<T> MoveProvider<T> for ScriptedMoveProvider<T>
where
    T: ArgumentId,
{
    fn choose_move(&mut self, _prompt: &MovePrompt<T>) -> Result<T, GameError> {
        self.moves
            .pop_front()
            .ok_or_else(|| GameError::InputAborted("no more scripted moves".to_string()))
    }

    fn move_rejected(&mut self, error: &GameError) {
        self.rejections.push(error.clone())
    }
}

/// A trait for objects listening to the events of a discussion game.
///
/// Every method has an empty default implementation.
pub trait GameListener<T>
where
    T: ArgumentId,
{
    /// Called when the proponent plays an argument, including the announcement of the claimed argument.
    fn proponent_moved(&self, _round: usize, _argument: &Argument<T>) {}

    /// Called when the proponent has no counter-move.
    fn proponent_conceded(&self, _round: usize) {}

    /// Called when a move of the opponent is accepted.
    fn opponent_moved(&self, _round: usize, _argument: &Argument<T>) {}

    /// Called once, when the game reaches a terminal status.
    fn game_over(&self, _status: GameStatus, _round: usize) {}
}
