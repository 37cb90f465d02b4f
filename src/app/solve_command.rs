use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use argame::{
    aa::{self, Query, Semantics},
    io::{ResponseWriter, TextWriter},
    solvers::{
        EnumerationListener, ExtensionKind, ExtensionSearch, GroundedPrunedSearch, PowerSetSearch,
        SemanticsEngine,
    },
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_SEARCH: &str = "SEARCH";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::reader_arg())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_SEARCH)
                    .long("search")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["power-set", "grounded"])
                    .default_value("power-set")
                    .help("the strategy used to search for extensions")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches
            .value_of(common::ARG_INPUT)
            .context("missing input file")?;
        let mut reader = common::create_reader(arg_matches)?;
        let af = common::read_file_path(file, reader.as_mut())?;
        let (query, semantics) = aa::read_problem_string(
            arg_matches
                .value_of(ARG_PROBLEM)
                .context("missing problem")?,
        )?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        if !query.requires_argument() && arg.is_some() {
            return Err(anyhow!("query {} does not take an argument", query.as_ref()));
        }
        let required_arg = || {
            arg.ok_or_else(|| anyhow!("missing argument (-a) for query {}", query.as_ref()))
        };
        let mut engine = SemanticsEngine::new_with_search(&af, create_search(arg_matches)?);
        info!("searching extensions with the {} strategy", engine.search_name());
        engine.add_listener(Box::new(EnumerationLogger));
        let writer = TextWriter::default();
        let mut out = std::io::stdout();
        match query {
            Query::SE => {
                let extension = match semantics {
                    Semantics::GR => Some(engine.grounded_extension()),
                    Semantics::PR => Some(engine.one_preferred_extension()?),
                    _ => engine.extensions(semantics)?.into_iter().next(),
                };
                match extension {
                    Some(ext) => writer.write_single_extension(&mut out, &ext),
                    None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
                }
            }
            Query::EE => {
                let extensions = engine.extensions(semantics)?;
                info!("found {} extension(s)", extensions.len());
                writer.write_extension_list(&mut out, &extensions)
            }
            Query::DC => {
                let (status, certificate) =
                    engine.is_credulously_accepted(semantics, required_arg()?)?;
                writer.write_acceptance_status(&mut out, status, certificate.as_deref())
            }
            Query::DS => {
                let (status, certificate) =
                    engine.is_skeptically_accepted(semantics, required_arg()?)?;
                writer.write_acceptance_status(&mut out, status, certificate.as_deref())
            }
        }
    }
}

fn create_search(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn ExtensionSearch<String>>> {
    match arg_matches.value_of(ARG_SEARCH) {
        Some("power-set") | None => Ok(Box::new(PowerSetSearch)),
        Some("grounded") => Ok(Box::new(GroundedPrunedSearch)),
        Some(s) => Err(anyhow!(r#"unknown search strategy "{}""#, s)),
    }
}

struct EnumerationLogger;

impl EnumerationListener for EnumerationLogger {
    fn enumeration_start(&self, kind: ExtensionKind, n_candidates: u64) {
        info!("looking for {} among {} candidate(s)", kind, n_candidates);
    }

    fn enumeration_end(&self, kind: ExtensionKind, n_extensions: usize) {
        info!("found {} {}", n_extensions, kind);
    }
}
