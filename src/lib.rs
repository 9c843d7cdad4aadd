//! Streaming evaluation of arithmetic expressions encoded as nested XML elements.
//!
//! Markup events (element open, text, element close) are pushed into a
//! [`builder::StackBuilder`], which assembles the expression tree and reduces it as
//! elements close. [`Evaluator`] wires the builder to an XML parser.

pub mod builder;
pub mod config;
pub mod operator;
pub mod reporting;
pub mod samples;
pub mod traits;
pub mod xml_source;

mod evaluator;
mod utils;

pub use config::{DivisionPolicy, EvaluatorConfig, UnrecognizedElementPolicy};
pub use evaluator::{Evaluation, Evaluator};
pub use xml_source::DocumentError;
