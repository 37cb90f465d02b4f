//! Objects used to read argumentation frameworks and write answers to problems.

mod aspartix_reader;
pub use aspartix_reader::AspartixReader;

mod json_reader;
pub use json_reader::JsonReader;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod text_writer;
pub use text_writer::TextWriter;
