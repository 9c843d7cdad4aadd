use crate::builder::BuilderError;

/// Receiver of the three markup events, delivered strictly in document order.
///
/// The handler never reads input by itself; an event source (see [`crate::xml_source`])
/// pushes events into it. `element_close` yields `Some(value)` once the root element of a
/// document has closed.
pub trait MarkupHandler {
    fn element_open(&mut self, name: &str) -> Result<(), BuilderError>;

    /// Raw character data, not yet trimmed.
    fn text(&mut self, content: &str) -> Result<(), BuilderError>;

    fn element_close(&mut self, name: &str) -> Result<Option<f64>, BuilderError>;
}

/// An owned markup event, mostly useful to replay recorded event streams.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkupEvent {
    Open(String),
    Text(String),
    Close(String),
}

impl MarkupEvent {
    /// Deliver this event to `handler`.
    pub fn dispatch<H: MarkupHandler + ?Sized>(
        &self,
        handler: &mut H,
    ) -> Result<Option<f64>, BuilderError> {
        match self {
            MarkupEvent::Open(name) => handler.element_open(name).map(|()| None),
            MarkupEvent::Text(content) => handler.text(content).map(|()| None),
            MarkupEvent::Close(name) => handler.element_close(name),
        }
    }
}
