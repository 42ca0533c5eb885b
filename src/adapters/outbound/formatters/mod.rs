/// Formatter adapters serializing documents and payloads for output
mod json_formatter;

pub use json_formatter::JsonFormatter;
