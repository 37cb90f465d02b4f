use crate::aa::{AAFramework, Argument, ArgumentId};
use anyhow::{Context, Result};
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while reading a framework.
///
/// The first parameter locates the warning in the input: a line number for text formats, an entry number for JSON.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read argumentation frameworks.
pub trait InstanceReader<T>
where
    T: ArgumentId,
{
    /// Reads an [`AAFramework`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use argame::aa::AAFramework;
    /// # use argame::io::{InstanceReader, JsonReader};
    /// fn read_af_from_str(s: &str) -> AAFramework<String> {
    ///     let reader = JsonReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid JSON framework")
    /// }
    /// # read_af_from_str(r#"{"Arguments": {"a": "it rains"}, "Attack Relations": []}"#);
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<T>>;

    /// Reads an argument identifier from a string and returns the matching argument.
    fn read_arg_from_str<'a>(&self, af: &'a AAFramework<T>, arg: &str) -> Result<&'a Argument<T>>;

    /// Adds a callback function to call when warnings are raised while reading a framework.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write answers to problems.
pub trait ResponseWriter<T>
where
    T: ArgumentId,
{
    /// Writes the text associated with the fact the problem has no extension.
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()>;

    /// Writes a single extension.
    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()>;

    /// Writes a list of extensions.
    fn write_extension_list(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()>;

    /// Writes an acceptance status, followed by its certificate if there is one.
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
        certificate: Option<&[&Argument<T>]>,
    ) -> Result<()>;
}

pub(crate) fn string_arg_from_str<'a>(
    af: &'a AAFramework<String>,
    arg: &str,
) -> Result<&'a Argument<String>> {
    af.argument_set()
        .get_argument(&arg.to_string())
        .with_context(|| format!(r#"while looking for argument "{}""#, arg))
}

pub(crate) fn write_no_extension(writer: &mut dyn Write) -> Result<()> {
    let context = "while writing problem has no extension";
    writeln!(writer, "NO").context(context)?;
    writer.flush().context(context)
}

pub(crate) fn write_acceptance_status(
    writer: &mut dyn Write,
    acceptance_status: bool,
) -> Result<()> {
    let context = "while writing an acceptance status";
    writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" }).context(context)?;
    writer.flush().context(context)
}
