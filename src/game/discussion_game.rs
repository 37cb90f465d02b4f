use super::{
    game_state::GameState, GameError, GameListener, GameRules, GameStatus, MovePrompt,
    MoveProvider, OpponentPolicy, ProponentPolicy, Turn,
};
use crate::{
    aa::{AAFramework, Argument, ArgumentId},
    utils::ArgumentMask,
};

/// The result of a proponent move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProponentMove<'a, T>
where
    T: ArgumentId,
{
    /// The proponent played this argument.
    Argument(&'a Argument<T>),
    /// The proponent had no counter-move and lost the game.
    Concede,
}

/// A discussion game in which a proponent defends a claimed argument against an opponent.
///
/// The proponent starts by announcing the claimed argument.
/// Then the players alternate: the opponent plays an argument allowed by the [`OpponentPolicy`],
/// and the proponent answers with an attacker of the opponent's argument chosen by the [`ProponentPolicy`].
/// A player who has to move but has no legal move loses the game.
///
/// The game may be driven move by move with [`proponent_move`](Self::proponent_move), [`opponent_move`](Self::opponent_move)
/// and [`check_win_condition`](Self::check_win_condition), or played to the end against a [`MoveProvider`] with [`play`](Self::play).
///
/// # Example
///
/// ```
/// # use argame::aa::{AAFramework, ArgumentSet};
/// # use argame::game::{DiscussionGame, GameRules, GameStatus, ProponentMove};
/// let af = AAFramework::new_with_argument_set(
///     ArgumentSet::new_with_ids(&["a0", "a1", "a2"]),
///     &[("a2", "a1"), ("a1", "a0")],
/// ).unwrap();
/// let mut game = DiscussionGame::new(&af, &"a0", GameRules::preferred()).unwrap();
/// game.proponent_move().unwrap();
/// game.opponent_move(&"a1").unwrap();
/// assert_eq!(GameStatus::Continue, game.check_win_condition());
/// match game.proponent_move().unwrap() {
///     ProponentMove::Argument(a) => assert_eq!("a2", *a.id()),
///     ProponentMove::Concede => unreachable!(),
/// }
/// assert_eq!(GameStatus::ProponentWin, game.check_win_condition());
/// ```
pub struct DiscussionGame<'a, T>
where
    T: ArgumentId,
{
    af: &'a AAFramework<T>,
    claimed: usize,
    rules: GameRules,
    state: GameState,
    listeners: Vec<Box<dyn GameListener<T>>>,
}

impl<'a, T> DiscussionGame<'a, T>
where
    T: ArgumentId,
{
    /// Builds a new game in which the proponent claims the argument with the given identifier.
    ///
    /// If no argument has this identifier, a [`FrameworkError::UnknownArgument`](crate::aa::FrameworkError::UnknownArgument) error is returned.
    pub fn new(af: &'a AAFramework<T>, claimed: &T, rules: GameRules) -> Result<Self, GameError> {
        let claimed = af.argument_set().get_argument(claimed)?.index();
        Ok(DiscussionGame {
            af,
            claimed,
            rules,
            state: GameState::new(af.n_arguments(), claimed),
            listeners: vec![],
        })
    }

    /// Adds a listener notified of the moves and of the end of the game.
    pub fn add_listener(&mut self, listener: Box<dyn GameListener<T>>) {
        self.listeners.push(listener)
    }

    /// Returns the framework the game is played on.
    pub fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    /// Returns the rules of the game.
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Returns the current state of the game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the argument claimed by the proponent.
    pub fn claimed_argument(&self) -> &'a Argument<T> {
        self.argument(self.claimed)
    }

    /// Returns the last argument played, or the claimed argument before the first move.
    pub fn current_argument(&self) -> &'a Argument<T> {
        self.argument(self.state.current_argument)
    }

    /// Returns the arguments committed by the proponent, starting with the claimed argument.
    pub fn proponent_committed(&self) -> Vec<&'a Argument<T>> {
        self.arguments(self.state.proponent_committed.as_slice())
    }

    /// Returns the arguments committed by the opponent, in the order they were played.
    pub fn opponent_committed(&self) -> Vec<&'a Argument<T>> {
        self.arguments(self.state.opponent_committed.as_slice())
    }

    /// Returns the status of the game, as computed by the last call to [`check_win_condition`](Self::check_win_condition) or move.
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Returns the arguments the opponent may play in the current position, in attack declaration order.
    pub fn legal_opponent_moves(&self) -> Vec<&'a Argument<T>> {
        self.arguments(&self.legal_opponent_move_indices())
    }

    /// Returns the arguments the proponent may answer with in the current position, in attack declaration order.
    ///
    /// These are the attackers of the current argument not committed by the opponent.
    pub fn proponent_candidates(&self) -> Vec<&'a Argument<T>> {
        self.arguments(&self.proponent_candidate_indices())
    }

    /// Makes the proponent play.
    ///
    /// The first move announces the claimed argument.
    /// Later moves play one of the [`proponent_candidates`](Self::proponent_candidates) selected by the proponent policy;
    /// if there is no candidate, the proponent concedes and the opponent wins.
    ///
    /// Errors are returned if the game is over or if the opponent is expected to play.
    pub fn proponent_move(&mut self) -> Result<ProponentMove<'a, T>, GameError> {
        self.check_can_play(Turn::Proponent)?;
        let chosen = if self.state.round == 0 {
            self.claimed
        } else {
            let candidates = self.proponent_candidate_indices();
            match self.select_proponent_move(&candidates) {
                Some(c) => c,
                None => {
                    self.listeners
                        .iter()
                        .for_each(|l| l.proponent_conceded(self.state.round));
                    self.finish(GameStatus::OpponentWin);
                    return Ok(ProponentMove::Concede);
                }
            }
        };
        self.state.proponent_committed.commit(chosen);
        self.state.current_argument = chosen;
        self.state.round += 1;
        self.state.turn = Turn::Opponent;
        let argument = self.argument(chosen);
        self.listeners
            .iter()
            .for_each(|l| l.proponent_moved(self.state.round, argument));
        Ok(ProponentMove::Argument(argument))
    }

    /// Makes the opponent play the argument with the given identifier.
    ///
    /// The candidate is checked in this order: it must be an argument ([`GameError::InvalidMove`]),
    /// it must satisfy the opponent policy ([`GameError::IllegalMove`]),
    /// and it must not have already been played by the opponent ([`GameError::RepeatedMove`]).
    /// A rejected move leaves the game unchanged.
    pub fn opponent_move(&mut self, candidate: &T) -> Result<&'a Argument<T>, GameError> {
        self.check_can_play(Turn::Opponent)?;
        let argument = self
            .af
            .argument_set()
            .get_argument(candidate)
            .map_err(|_| GameError::InvalidMove(candidate.to_string()))?;
        let index = argument.index();
        if !self.is_legal_for_opponent(index) {
            let reason = match self.rules.opponent_policy() {
                OpponentPolicy::AttacksCurrent => {
                    format!("does not attack {}", self.current_argument())
                }
                OpponentPolicy::AttacksProponent => {
                    "does not attack an argument of the proponent".to_string()
                }
            };
            return Err(GameError::IllegalMove {
                candidate: candidate.to_string(),
                reason,
            });
        }
        if self.state.opponent_committed.contains(index) {
            return Err(GameError::RepeatedMove(candidate.to_string()));
        }
        self.state.opponent_committed.commit(index);
        self.state.current_argument = index;
        self.state.turn = Turn::Proponent;
        self.listeners
            .iter()
            .for_each(|l| l.opponent_moved(self.state.round, argument));
        Ok(argument)
    }

    /// Computes the status of the game.
    ///
    /// The game is lost by the player expected to move if this player has no legal move.
    /// Once the game is over, the verdict is returned again without modifying the game.
    pub fn check_win_condition(&mut self) -> GameStatus {
        if self.state.status.is_terminal() {
            return self.state.status;
        }
        match self.state.turn {
            Turn::Proponent if self.state.round > 0 => {
                if self.proponent_candidate_indices().is_empty() {
                    self.finish(GameStatus::OpponentWin)
                }
            }
            Turn::Proponent => {}
            Turn::Opponent => {
                if self.legal_opponent_move_indices().is_empty() {
                    self.finish(GameStatus::ProponentWin)
                }
            }
        }
        self.state.status
    }

    /// Plays the game to its end, asking the opponent moves to the provider.
    ///
    /// Rejected opponent moves are reported to the provider with [`MoveProvider::move_rejected`] and asked again.
    /// Errors that are not move rejections, like [`GameError::InputAborted`], stop the game and are returned.
    pub fn play(&mut self, provider: &mut dyn MoveProvider<T>) -> Result<GameStatus, GameError> {
        loop {
            let status = self.check_win_condition();
            if status.is_terminal() {
                return Ok(status);
            }
            match self.state.turn {
                Turn::Proponent => {
                    self.proponent_move()?;
                }
                Turn::Opponent => self.request_opponent_move(provider)?,
            }
        }
    }

    fn request_opponent_move(&mut self, provider: &mut dyn MoveProvider<T>) -> Result<(), GameError> {
        loop {
            let prompt = MovePrompt {
                round: self.state.round,
                current_argument: self.current_argument(),
                legal_moves: self.legal_opponent_moves(),
            };
            let candidate = provider.choose_move(&prompt)?;
            match self.opponent_move(&candidate) {
                Ok(_) => return Ok(()),
                Err(e) if e.is_recoverable() => provider.move_rejected(&e),
                Err(e) => return Err(e),
            }
        }
    }

    fn check_can_play(&self, player: Turn) -> Result<(), GameError> {
        if self.state.status.is_terminal() {
            Err(GameError::GameOver)
        } else if self.state.turn != player {
            Err(GameError::OutOfTurn(player.player_name()))
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.state.status = status;
        self.listeners
            .iter()
            .for_each(|l| l.game_over(status, self.state.round));
    }

    fn is_legal_for_opponent(&self, index: usize) -> bool {
        let attacks = self.af.attack_indices();
        let mut attacked = self
            .af
            .attack_ids_from(index)
            .iter()
            .map(|att| attacks[*att].1);
        match self.rules.opponent_policy() {
            OpponentPolicy::AttacksCurrent => attacked.any(|a| a == self.state.current_argument),
            OpponentPolicy::AttacksProponent => {
                attacked.any(|a| self.state.proponent_committed.contains(a))
            }
        }
    }

    fn legal_opponent_move_indices(&self) -> Vec<usize> {
        let attacks = self.af.attack_indices();
        match self.rules.opponent_policy() {
            OpponentPolicy::AttacksCurrent => self.unplayed_by_opponent(
                self.af
                    .attack_ids_to(self.state.current_argument)
                    .iter()
                    .map(|att| attacks[*att].0),
            ),
            OpponentPolicy::AttacksProponent => self.unplayed_by_opponent(
                attacks
                    .iter()
                    .filter(|(_, attacked)| self.state.proponent_committed.contains(*attacked))
                    .map(|(attacker, _)| *attacker),
            ),
        }
    }

    fn proponent_candidate_indices(&self) -> Vec<usize> {
        let attacks = self.af.attack_indices();
        self.unplayed_by_opponent(
            self.af
                .attack_ids_to(self.state.current_argument)
                .iter()
                .map(|att| attacks[*att].0),
        )
    }

    fn unplayed_by_opponent<I>(&self, arguments: I) -> Vec<usize>
    where
        I: Iterator<Item = usize>,
    {
        let mut seen = ArgumentMask::empty(self.af.n_arguments());
        arguments
            .filter(|a| {
                if seen.contains(*a) || self.state.opponent_committed.contains(*a) {
                    false
                } else {
                    seen.insert(*a);
                    true
                }
            })
            .collect()
    }

    fn select_proponent_move(&self, candidates: &[usize]) -> Option<usize> {
        match self.rules.proponent_policy() {
            ProponentPolicy::Unrestricted => candidates.first().copied(),
            ProponentPolicy::AdmissibilityPreserving => candidates
                .iter()
                .copied()
                .find(|c| {
                    !self.af.is_self_attacking(self.argument(*c)) && !self.conflicts_with_proponent(*c)
                })
                .or_else(|| candidates.first().copied()),
        }
    }

    fn conflicts_with_proponent(&self, index: usize) -> bool {
        let attacks = self.af.attack_indices();
        let committed = &self.state.proponent_committed;
        self.af
            .attack_ids_from(index)
            .iter()
            .any(|att| committed.contains(attacks[*att].1))
            || self
                .af
                .attack_ids_to(index)
                .iter()
                .any(|att| committed.contains(attacks[*att].0))
    }

    fn argument(&self, index: usize) -> &'a Argument<T> {
        self.af.argument_set().get_argument_by_index(index)
    }

    fn arguments(&self, indices: &[usize]) -> Vec<&'a Argument<T>> {
        indices.iter().map(|i| self.argument(*i)).collect()
    }
}
