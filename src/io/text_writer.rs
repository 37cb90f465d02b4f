use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, ArgumentId};
use anyhow::{anyhow, Context, Result};
use std::io::Write;

/// A writer for answers in the textual format of the Aspartix tools.
///
/// Extensions are written between square brackets, their identifiers separated by commas (`[a,c]`),
/// lists of extensions are written the same way (`[[a,c],[b,c]]`), and acceptance statuses are written `YES` or `NO`.
/// An acceptance status may be followed by a certificate extension on its own line.
///
/// Identifiers are written as they are in answers, so identifiers containing commas or brackets make them ambiguous.
/// Frameworks are only written when every identifier can be read back by the [`AspartixReader`](super::AspartixReader).
///
/// # Example
///
/// ```
/// # use argame::aa::{AAFramework, ArgumentId};
/// # use argame::io::TextWriter;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: ArgumentId>(af: &AAFramework<T>) -> Result<()> {
///     TextWriter::default().write_framework(af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::<String>::default()).unwrap();
/// ```
#[derive(Default)]
pub struct TextWriter {}

impl TextWriter {
    /// Writes a framework to the provided writer, using the Aspartix input format.
    ///
    /// An error is returned before anything is written if an argument identifier cannot be read back in this format.
    pub fn write_framework<T: ArgumentId>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        if let Some(arg) = framework
            .argument_set()
            .iter()
            .find(|a| !super::aspartix_reader::is_readable_identifier(&a.to_string()))
        {
            return Err(anyhow!(
                r#"argument "{}" cannot be written in the Aspartix format"#,
                arg
            ))
            .context(context);
        }
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

fn extension_to_string<T: ArgumentId>(extension: &[&Argument<T>]) -> String {
    format!(
        "[{}]",
        extension
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(",")
    )
}

impl<T> ResponseWriter<T> for TextWriter
where
    T: ArgumentId,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", extension_to_string(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extension_list(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()> {
        let context = "while writing a list of extensions";
        let list = extensions
            .iter()
            .map(|ext| extension_to_string(ext))
            .collect::<Vec<String>>()
            .join(",");
        writeln!(writer, "[{}]", list).context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
        certificate: Option<&[&Argument<T>]>,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)?;
        match certificate {
            Some(c) => self.write_single_extension(writer, c),
            None => Ok(()),
        }
    }
}
