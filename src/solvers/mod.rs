//! The semantics engine: predicates, extension searches and acceptance checks.

mod extension_search;
pub use extension_search::GroundedPrunedSearch;
pub use extension_search::PowerSetSearch;
pub use extension_search::MAX_ENUMERATED_ARGUMENTS;

pub mod predicates;

mod semantics_engine;
pub use semantics_engine::SemanticsEngine;

mod semantics_error;
pub use semantics_error::SemanticsError;

mod specs;
pub use specs::EnumerationListener;
pub use specs::ExtensionKind;
pub use specs::ExtensionSearch;
