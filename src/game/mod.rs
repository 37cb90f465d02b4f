//! The discussion game between a proponent and an opponent.

mod discussion_game;
pub use discussion_game::DiscussionGame;
pub use discussion_game::ProponentMove;

mod game_error;
pub use game_error::GameError;

mod game_state;
pub use game_state::GameState;
pub use game_state::GameStatus;
pub use game_state::Turn;

mod move_provider;
pub use move_provider::GameListener;
pub use move_provider::MovePrompt;
pub use move_provider::MoveProvider;
pub use move_provider::ScriptedMoveProvider;

mod rules;
pub use rules::GameRules;
pub use rules::OpponentPolicy;
pub use rules::ProponentPolicy;
