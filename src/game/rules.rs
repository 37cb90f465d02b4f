use anyhow::anyhow;

/// The way the proponent selects its counter-moves.
///
/// Candidates are always the attackers of the current argument that the opponent has not committed, taken in attack declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProponentPolicy {
    /// Prefer the first candidate that is not self-attacking and is in no conflict with the arguments the proponent has already committed;
    /// fall back to the first candidate if there is no such one.
    AdmissibilityPreserving,
    /// Play the first candidate.
    Unrestricted,
}

/// The condition a move of the opponent must satisfy to be legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentPolicy {
    /// The opponent must attack the current argument.
    AttacksCurrent,
    /// The opponent must attack one of the arguments committed by the proponent.
    AttacksProponent,
}

/// The legality rules of a discussion game.
///
/// The rules are chosen when the game is built; there is no default set of rules.
///
/// # Example
///
/// ```
/// # use argame::game::{GameRules, OpponentPolicy, ProponentPolicy};
/// let rules = GameRules::preferred();
/// assert_eq!(ProponentPolicy::AdmissibilityPreserving, rules.proponent_policy());
/// assert_eq!(OpponentPolicy::AttacksCurrent, rules.opponent_policy());
/// assert_eq!(rules, GameRules::try_from("preferred").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    proponent: ProponentPolicy,
    opponent: OpponentPolicy,
}

impl GameRules {
    /// Builds rules from the two policies.
    pub fn new(proponent: ProponentPolicy, opponent: OpponentPolicy) -> Self {
        Self {
            proponent,
            opponent,
        }
    }

    /// The rules of the preferred discussion game: an admissibility-preserving proponent against an opponent attacking the current argument.
    pub fn preferred() -> Self {
        Self::new(
            ProponentPolicy::AdmissibilityPreserving,
            OpponentPolicy::AttacksCurrent,
        )
    }

    /// Unrestricted rules: the proponent plays the first candidate, and the opponent may attack any argument of the proponent.
    pub fn unrestricted() -> Self {
        Self::new(ProponentPolicy::Unrestricted, OpponentPolicy::AttacksProponent)
    }

    /// Returns the policy of the proponent.
    pub fn proponent_policy(&self) -> ProponentPolicy {
        self.proponent
    }

    /// Returns the policy of the opponent.
    pub fn opponent_policy(&self) -> OpponentPolicy {
        self.opponent
    }
}

impl TryFrom<&str> for GameRules {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "preferred" => Ok(GameRules::preferred()),
            "unrestricted" => Ok(GameRules::unrestricted()),
            _ => Err(anyhow!(r#"undefined game rules "{}""#, value)),
        }
    }
}
