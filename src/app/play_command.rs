use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use argame::{
    aa::Argument,
    game::{
        DiscussionGame, GameError, GameListener, GameRules, GameStatus, MovePrompt, MoveProvider,
    },
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

const CMD_NAME: &str = "play";

const ARG_FILE: &str = "FILE";
const ARG_CLAIMED: &str = "CLAIMED";
const ARG_RULES: &str = "RULES";

pub(crate) struct PlayCommand;

impl PlayCommand {
    pub(crate) fn new() -> Self {
        PlayCommand
    }
}

impl<'a> Command<'a> for PlayCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Plays a discussion game in which the user is the opponent")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_FILE)
                    .index(1)
                    .empty_values(false)
                    .help("the input file that contains the AF")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_CLAIMED)
                    .index(2)
                    .empty_values(false)
                    .help("the argument claimed by the proponent")
                    .required(true),
            )
            .arg(common::reader_arg())
            .arg(
                Arg::with_name(ARG_RULES)
                    .long("rules")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["preferred", "unrestricted"])
                    .default_value("preferred")
                    .help("the legality rules of the game")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(ARG_FILE).context("missing input file")?;
        let claimed = arg_matches
            .value_of(ARG_CLAIMED)
            .context("missing claimed argument")?;
        let rules = GameRules::try_from(arg_matches.value_of(ARG_RULES).unwrap_or("preferred"))?;
        let mut reader = common::create_reader(arg_matches)?;
        let af = common::read_file_path(file, reader.as_mut())?;
        let mut game = DiscussionGame::new(&af, &claimed.to_string(), rules)
            .context("while setting up the discussion game")?;
        info!("playing with rules {:?}", rules);
        game.add_listener(Box::new(GameLogger));
        game.add_listener(Box::new(TerminalPrinter));
        println!("Welcome to the discussion game!");
        println!("You are the opponent. Try to attack the arguments presented by the proponent.");
        let stdin = std::io::stdin();
        let mut provider = TerminalMoveProvider::new(stdin.lock(), std::io::stdout());
        game.play(&mut provider)
            .context("the game was interrupted")?;
        Ok(())
    }
}

/// A move provider reading the opponent moves from a terminal.
///
/// Each prompt lists the legal moves; the end of the input aborts the game.
struct TerminalMoveProvider<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalMoveProvider<R, W>
where
    R: BufRead,
    W: Write,
{
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_prompt(&mut self, prompt: &MovePrompt<String>) -> std::io::Result<()> {
        writeln!(self.output, "Possible moves for you:")?;
        for arg in prompt.legal_moves() {
            writeln!(self.output, "  {}: {}", arg, arg.label())?;
        }
        write!(self.output, "Your move (enter argument id): ")?;
        self.output.flush()
    }
}

impl<R, W> MoveProvider<String> for TerminalMoveProvider<R, W>
where
    R: BufRead,
    W: Write,
{
    fn choose_move(&mut self, prompt: &MovePrompt<String>) -> Result<String, GameError> {
        self.write_prompt(prompt)
            .map_err(|e| GameError::InputAborted(e.to_string()))?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(GameError::InputAborted("end of input".to_string())),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(GameError::InputAborted(e.to_string())),
        }
    }

    fn move_rejected(&mut self, error: &GameError) {
        if let Err(e) = writeln!(self.output, "{}. Try again.", error) {
            warn!("could not report the rejected move ({}): {}", error, e);
        }
    }
}

struct TerminalPrinter;

impl GameListener<String> for TerminalPrinter {
    fn proponent_moved(&self, round: usize, argument: &Argument<String>) {
        println!(
            "Round {}: Proponent's argument: {}: '{}'",
            round,
            argument,
            argument.label()
        );
    }

    fn game_over(&self, status: GameStatus, _round: usize) {
        match status {
            GameStatus::ProponentWin => {
                println!("Proponent wins! No more moves left for the opponent.")
            }
            GameStatus::OpponentWin => println!("You win! The proponent cannot make a move."),
            GameStatus::Continue => {}
        }
    }
}

struct GameLogger;

impl GameListener<String> for GameLogger {
    fn proponent_moved(&self, round: usize, argument: &Argument<String>) {
        debug!("round {}: the proponent plays {}", round, argument);
    }

    fn proponent_conceded(&self, round: usize) {
        debug!("round {}: the proponent has no counter-move", round);
    }

    fn opponent_moved(&self, round: usize, argument: &Argument<String>) {
        debug!("round {}: the opponent plays {}", round, argument);
    }

    fn game_over(&self, status: GameStatus, round: usize) {
        info!("game over after {} round(s): {}", round, status);
    }
}
