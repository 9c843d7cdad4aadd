//! The event-driven stack machine which turns markup events into a number.

mod builder_error;
mod markup_event;
mod stack_builder;

pub use builder_error::{BuilderError, UnrecognizedElement};
pub use markup_event::{MarkupEvent, MarkupHandler};
pub use stack_builder::{BuilderState, StackBuilder};
