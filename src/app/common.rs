use anyhow::{anyhow, Context, Result};
use argame::{
    aa::{AAFramework, ArgumentId},
    io::{AspartixReader, InstanceReader, JsonReader},
};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["json", "apx"])
        .default_value("json")
        .help("the input file format")
        .required(false)
}

/// Builds the reader selected by the `--reader` argument.
pub(crate) fn create_reader(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn InstanceReader<String>>> {
    match arg_matches.value_of(ARG_READER) {
        Some("json") | None => Ok(Box::<JsonReader>::default()),
        Some("apx") => Ok(Box::<AspartixReader>::default()),
        Some(r) => Err(anyhow!(r#"unknown reader "{}""#, r)),
    }
}

/// Reads the framework stored in a file, logging the warnings raised by the reader.
pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: ArgumentId,
{
    reader.add_warning_handler(Box::new(|position, msg| warn!("at {}: {}", position, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized).with_context(|| format!("while opening {:?}", canonicalized))?,
    );
    let af = reader
        .read(&mut file_reader)
        .with_context(|| format!(r#"while reading "{}""#, file_path))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
