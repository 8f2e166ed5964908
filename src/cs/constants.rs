//! Element, attribute and marker constants for C# XML documentation exports
//!
//! This module contains string constants for the element names found in the
//! compiler-generated documentation file and the markers written into the
//! rewritten text. Keeping them here gives one place to look when the export
//! vocabulary grows.

/// Element holding the assembly description
///
/// Example: `<assembly><name>MyLib</name></assembly>`
pub const ASSEMBLY_ELEMENT: &str = "assembly";

/// Element holding a single text value, used under `assembly`
pub const NAME_ELEMENT: &str = "name";

/// Element for one documented member
///
/// Example: `<member name="M:MyLib.Calc.Add(System.Int32,System.Int32)">`
pub const MEMBER_ELEMENT: &str = "member";

/// Attribute carrying the encoded member name, also used by `param` and `typeparam`
pub const NAME_ATTRIBUTE: &str = "name";

/// Element for the short description of a member
pub const SUMMARY_ELEMENT: &str = "summary";

/// Element for the long form remarks
pub const REMARKS_ELEMENT: &str = "remarks";

/// Element describing the return value of a method
pub const RETURNS_ELEMENT: &str = "returns";

/// Element holding example usage, usually wrapping a `code` block
pub const EXAMPLE_ELEMENT: &str = "example";

/// Element describing a method parameter
///
/// Example: `<param name="a">first value</param>`
pub const PARAM_ELEMENT: &str = "param";

/// Element describing a generic type parameter
///
/// Example: `<typeparam name="T">item type</typeparam>`
pub const TYPEPARAM_ELEMENT: &str = "typeparam";

/// Opening block code delimiter
pub const CODE_OPEN_TAG: &str = "<code>";

/// Closing block code delimiter
pub const CODE_CLOSE_TAG: &str = "</code>";

/// Language tag for fenced code blocks
pub const CODE_LANGUAGE: &str = "csharp";

/// Fenced code marker
pub const CODE_FENCE: &str = "```";

/// Separator used when joining the lines of a summary
pub const SUMMARY_LINE_SEPARATOR: &str = "  ";
