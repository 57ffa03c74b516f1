mod element;
mod xml_parser;

// Re-export public API
pub use element::Element;
pub use xml_parser::{load_document, parse_document_bytes};
