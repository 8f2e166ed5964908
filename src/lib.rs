//! C# XML Documentation to Markdown
//!
//! This library reads the XML documentation file emitted by the C# compiler and
//! produces per-member documentation records with Markdown friendly text.

pub mod cs;
pub mod logging;
#[cfg(test)]
pub mod test_utils;
