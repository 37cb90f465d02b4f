use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::{
    collections::HashSet,
    io::{BufRead, BufReader, Read},
};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
    static ref ARG_NAME_PATTERN: Regex = Regex::new(r"^[_[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

/// Returns `true` iff the identifier can be read back from a file in the Aspartix format.
pub(crate) fn is_readable_identifier(id: &str) -> bool {
    ARG_NAME_PATTERN.is_match(id)
}

const AMBIGUOUS_SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

fn captured_arg(c: &Captures, i: usize, warnings: &mut Vec<String>) -> String {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed = str_arg.trim();
    if trimmed.len() != str_arg.len() {
        warnings.push(AMBIGUOUS_SPACES_WARNING.to_string());
    }
    trimmed.to_string()
}

fn try_read_arg_line(l: &str, warnings: &mut Vec<String>) -> Result<Option<String>> {
    if !ARG_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1, warnings))),
        None => Err(anyhow!("invalid argument name in {}", l.trim())),
    }
}

fn try_read_att_line(l: &str, warnings: &mut Vec<String>) -> Result<Option<(String, String)>> {
    if !ATT_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
        Some(c) => Ok(Some((
            captured_arg(&c, 1, warnings),
            captured_arg(&c, 2, warnings),
        ))),
        None => Err(anyhow!("invalid argument names in {}", l.trim())),
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The format has no labels; the label of each argument is its identifier.
///
/// Arguments declared twice are kept once and raise a warning.
///
/// # Aspartix format
///
/// The following content defines a framework with three arguments `a0`, `a1` and `a2`, in which `a2` attacks `a1` and `a1` attacks `a0`.
///
/// ```text
/// arg(a0).
/// arg(a1).
/// arg(a2).
/// att(a2,a1).
/// att(a1,a0).
/// ```
///
/// # Example
///
/// ```
/// # use argame::aa::AAFramework;
/// # use argame::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn_all(&self, line: usize, warnings: &mut Vec<String>) {
        for w in warnings.drain(..) {
            self.warning_handlers.iter().for_each(|h| (h)(line, w.clone()));
        }
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arguments = vec![];
        let mut declared = HashSet::new();
        let mut attacks = vec![];
        let mut warnings = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", i + 1);
            let l = line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some(a) = try_read_arg_line(&l, &mut warnings).with_context(context)? {
                if !attacks.is_empty() {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                if declared.insert(a.clone()) {
                    arguments.push((a.clone(), a));
                } else {
                    warnings.push(format!("argument {} is declared more than once", a));
                }
                self.warn_all(i + 1, &mut warnings);
                continue;
            }
            if let Some(attack) = try_read_att_line(&l, &mut warnings).with_context(context)? {
                attacks.push(attack);
                self.warn_all(i + 1, &mut warnings);
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        AAFramework::new(arguments, &attacks).context("while building the framework")
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        specs::string_arg_from_str(af, arg)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
