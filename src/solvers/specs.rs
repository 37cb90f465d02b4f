use super::SemanticsError;
use crate::{
    aa::{AAFramework, ArgumentId},
    utils::ArgumentMask,
};

/// The kind of extensions an enumeration is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    /// Admissible sets
    Admissible,
    /// Complete extensions
    Complete,
    /// Preferred extensions
    Preferred,
}

impl std::fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionKind::Admissible => write!(f, "admissible sets"),
            ExtensionKind::Complete => write!(f, "complete extensions"),
            ExtensionKind::Preferred => write!(f, "preferred extensions"),
        }
    }
}

/// A trait for objects listening to the enumerations made by the semantics engine.
///
/// The engine itself never logs anything; listeners are the way to observe its progress.
pub trait EnumerationListener {
    /// Called when an enumeration begins, with the number of candidate sets that will be checked.
    fn enumeration_start(&self, kind: ExtensionKind, n_candidates: u64);

    /// Called when an enumeration ends, with the number of extensions found.
    fn enumeration_end(&self, kind: ExtensionKind, n_extensions: usize);
}

impl EnumerationListener for Vec<Box<dyn EnumerationListener>> {
    fn enumeration_start(&self, kind: ExtensionKind, n_candidates: u64) {
        self.iter()
            .for_each(|l| l.enumeration_start(kind, n_candidates))
    }

    fn enumeration_end(&self, kind: ExtensionKind, n_extensions: usize) {
        self.iter().for_each(|l| l.enumeration_end(kind, n_extensions))
    }
}

/// A strategy used to search for admissible sets and complete extensions.
///
/// The semantics engine delegates its enumerations to such a strategy, allowing the search algorithm to be replaced without changing the callers.
/// Extensions are returned as [`ArgumentMask`] objects built for the framework under consideration.
pub trait ExtensionSearch<T>
where
    T: ArgumentId,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Computes all the admissible sets of the framework.
    fn admissible_sets(
        &self,
        af: &AAFramework<T>,
        listener: &dyn EnumerationListener,
    ) -> Result<Vec<ArgumentMask>, SemanticsError>;

    /// Computes all the complete extensions of the framework.
    ///
    /// The default implementation keeps the admissible sets that are equal to the set of arguments they defend.
    fn complete_extensions(
        &self,
        af: &AAFramework<T>,
        listener: &dyn EnumerationListener,
    ) -> Result<Vec<ArgumentMask>, SemanticsError> {
        let admissible = self.admissible_sets(af, listener)?;
        listener.enumeration_start(ExtensionKind::Complete, admissible.len() as u64);
        let complete = admissible
            .into_iter()
            .filter(|s| super::predicates::defended_arguments(af, s) == *s)
            .collect::<Vec<ArgumentMask>>();
        listener.enumeration_end(ExtensionKind::Complete, complete.len());
        Ok(complete)
    }
}
