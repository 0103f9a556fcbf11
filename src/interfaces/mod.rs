//! Adapters for external data formats: CSV site tables and URLs.

pub mod csv;
pub mod url_composer;
