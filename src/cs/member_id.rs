//! Decoding of documentation member names
//!
//! Documentation exports identify every entry with a compact string such as
//! `T:MyLib.Calc` or `M:MyLib.Calc.Add(System.Int32,System.Int32)`: one kind
//! discriminator, a colon, the dotted path and an optional parameter list.

use std::fmt;
use std::sync::LazyLock;
use regex::Regex;
use serde::Serialize;

/// Kind of a documented member, decoded from the discriminator character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemberKind {
    Field,
    Property,
    Type,
    Event,
    Method,
}

/// Discriminator characters and the kinds they stand for
const DISCRIMINATORS: [(char, MemberKind); 5] = [
    ('F', MemberKind::Field),
    ('P', MemberKind::Property),
    ('T', MemberKind::Type),
    ('E', MemberKind::Event),
    ('M', MemberKind::Method),
];

impl MemberKind {
    /// Look up the kind for a discriminator character.
    /// Any character outside the table (`N` for namespaces, `!` for errors, ...) is `None`.
    pub fn from_discriminator(c: char) -> Option<Self> {
        DISCRIMINATORS
            .iter()
            .find(|(discriminator, _)| *discriminator == c)
            .map(|(_, kind)| *kind)
    }

    pub fn discriminator(self) -> char {
        match self {
            MemberKind::Field => 'F',
            MemberKind::Property => 'P',
            MemberKind::Type => 'T',
            MemberKind::Event => 'E',
            MemberKind::Method => 'M',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Field => "Field",
            MemberKind::Property => "Property",
            MemberKind::Type => "Type",
            MemberKind::Event => "Event",
            MemberKind::Method => "Method",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminator, path up to the final segment, final identifier, parameter list
static MEMBER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.):(.+)\.([^.()]+)?(\(.+\))?$").expect("Failed to compile member name regex")
});

/// Decoded identity of a documentation entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub kind: MemberKind,
    /// Fully qualified declaring type; for types, the type's own full name
    pub owning_type: String,
    /// Simple member name. For types this repeats the last segment of `owning_type`.
    pub member_name: String,
    /// Parenthesized parameter list of methods and indexers, as written in the export
    pub signature: Option<String>,
}

impl MemberId {
    /// Decode a member name string.
    ///
    /// Returns `None` when the string does not have the `K:Path.Name(args)` shape or
    /// when `K` is not a known kind. Both are normal for some export rows.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = MEMBER_NAME_RE.captures(raw)?;

        let mut discriminator = caps.get(1)?.as_str().chars();
        let kind = MemberKind::from_discriminator(discriminator.next()?)?;

        let path = caps.get(2)?.as_str();
        let member_name = caps.get(3).map_or("", |m| m.as_str());
        let signature = caps.get(4).map(|m| m.as_str().to_string());

        let owning_type = if kind == MemberKind::Type {
            format!("{}.{}", path, member_name)
        } else {
            path.to_string()
        };

        Some(Self {
            kind,
            owning_type,
            member_name: member_name.to_string(),
            signature,
        })
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.kind, self.owning_type, self.member_name)
    }
}
