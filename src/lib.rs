//! Argame computes the semantics of abstract argumentation frameworks and plays discussion games on them.
//!
//! Frameworks ([`aa::AAFramework`]) are read by the objects of the [`io`] module.
//! The [`solvers::SemanticsEngine`] computes admissible sets, complete, preferred and grounded extensions, and acceptance statuses.
//! The [`game::DiscussionGame`] lets a proponent defend a claimed argument against an opponent.

#![warn(missing_docs)]

pub mod aa;

pub mod game;

pub mod io;

pub mod solvers;

pub mod utils;
