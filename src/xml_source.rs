//! Event source backed by the `xml-rs` pull parser.
//!
//! Only elements and character data matter for evaluation. Attributes, namespaces,
//! comments, processing instructions and the XML declaration are dropped here.

use crate::builder::{BuilderError, MarkupHandler};
use std::io::Read;
use thiserror::Error;
use xml::reader::{EventReader, XmlEvent};

/// An error which prevented a whole document from producing a result.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Malformed markup: {0}")]
    Markup(#[from] xml::reader::Error),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error("Document ended without a result")]
    Incomplete,
    #[error("Unexpected content after the root element (which evaluated to {value})")]
    TrailingContent { value: f64 },
}

/// Pull every event of one document out of `source` and push it into `handler`.
///
/// Returns the value delivered by the handler when the root element closed. An element or
/// non-blank text after that point fails with [`DocumentError::TrailingContent`] and is
/// never delivered to the handler. Stops at the first error; it is then up to the caller
/// to reset the handler.
pub fn drive<R: Read, H: MarkupHandler + ?Sized>(
    source: R,
    handler: &mut H,
) -> Result<f64, DocumentError> {
    let mut result = None;
    for event in EventReader::new(source) {
        let event = event?;
        if let Some(value) = result
            && is_content(&event)
        {
            return Err(DocumentError::TrailingContent { value });
        }
        match event {
            XmlEvent::StartElement { name, .. } => handler.element_open(&name.local_name)?,
            XmlEvent::EndElement { name } => {
                if let Some(value) = handler.element_close(&name.local_name)? {
                    result = Some(value);
                }
            }
            XmlEvent::Characters(content)
            | XmlEvent::CData(content)
            | XmlEvent::Whitespace(content) => handler.text(&content)?,
            _ => (),
        }
    }
    result.ok_or(DocumentError::Incomplete)
}

/// True for events which would contribute to an expression.
fn is_content(event: &XmlEvent) -> bool {
    match event {
        XmlEvent::StartElement { .. } => true,
        XmlEvent::Characters(content) | XmlEvent::CData(content) => {
            !content.trim().is_empty()
        }
        _ => false,
    }
}
