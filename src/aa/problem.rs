use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// Admissible sets
    AD,
    /// The complete semantics
    CO,
    /// The grounded semantics
    GR,
    /// The preferred semantics
    PR,
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "ad" => Ok(Semantics::AD),
            "co" => Ok(Semantics::CO),
            "gr" => Ok(Semantics::GR),
            "pr" => Ok(Semantics::PR),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff the query needs an argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "se" => Ok(Query::SE),
            "ee" => Ok(Query::EE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

/// Iterates over the problem strings handled by the library.
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| {
        Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
    })
}
