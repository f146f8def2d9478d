//! The three comparison pipelines, each a straight line from input files to
//! one or more render calls. No state is shared between them.

pub mod errors;
pub mod function_values;
pub mod timings;
