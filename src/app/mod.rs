mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod play_command;
pub(crate) use play_command::PlayCommand;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;

mod writable_string;
