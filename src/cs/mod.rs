//! CS Documentation module
//!
//! This module turns the XML documentation file produced by the C# compiler into
//! documentation records with Markdown friendly text.
//!
//! It works in two stages:
//! 1. Member names such as `M:MyLib.Calc.Add(System.Int32)` are decoded into a kind,
//!    an owning type and a member name
//! 2. Inline markup (`see`, `paramref`, `para`, `code`) in each text field is
//!    rewritten into links, inline code, line breaks and fenced code blocks

pub mod constants;
pub mod error;
pub mod extractor;
pub mod markup;
pub mod member_doc;
pub mod member_id;
pub mod xml_tree;

// Re-export the main entry points
pub use error::{CsError, CsResult};
pub use extractor::extract_members;
pub use markup::{rewrite_markup, strip_indentation};
pub use member_doc::{DocumentedMember, NamedDocs};
pub use member_id::{MemberId, MemberKind};
pub use xml_tree::XmlDocument;
