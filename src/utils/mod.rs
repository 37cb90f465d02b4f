//! Utility structures and functions shared by the semantics engine and the discussion game.

mod argument_mask;
pub use argument_mask::ArgumentMask;

mod grounded_extension_computer;
pub use grounded_extension_computer::grounded_extension;
