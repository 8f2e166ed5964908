//! Extraction of documentation records from a parsed documentation export
//!
//! Walks every `member` element of the export in document order, decodes its
//! name, and converts the text-bearing children into a [`DocumentedMember`].
//! Entries whose name cannot be decoded are skipped; only a missing
//! `assembly/name` element fails the whole document.

use std::borrow::Cow;
use quick_xml::escape::unescape;
use super::constants::*;
use super::error::{CsError, CsResult};
use super::markup::{normalize_summary, rewrite_markup, strip_indentation};
use super::member_doc::{DocumentedMember, NamedDocs};
use super::member_id::MemberId;
use super::xml_tree::{XmlDocument, XmlElement};

/// Read the assembly name from the first `assembly/name` element
pub fn assembly_name(document: &XmlDocument) -> CsResult<String> {
    document
        .descendants(ASSEMBLY_ELEMENT)
        .first()
        .and_then(|assembly| assembly.child(NAME_ELEMENT))
        .map(|name| name.text().trim().to_string())
        .ok_or(CsError::MissingAssemblyName)
}

/// Extract one record per well-formed `member` element.
///
/// # Arguments
///
/// * `document` - The parsed documentation export
/// * `resolution_namespace` - Namespace for cross reference links; the assembly name
///   of the document when `None`
///
/// # Returns
///
/// * `Ok(Vec<DocumentedMember>)` in document order
/// * `Err(CsError::MissingAssemblyName)` if the export has no `assembly/name` element
pub fn extract_members(
    document: &XmlDocument,
    resolution_namespace: Option<&str>,
) -> CsResult<Vec<DocumentedMember>> {
    let assembly = assembly_name(document)?;
    let namespace = resolution_namespace.unwrap_or(assembly.as_str());

    let mut members = Vec::new();
    let mut skipped = 0usize;

    for element in document.descendants(MEMBER_ELEMENT) {
        match extract_member(element, namespace) {
            Some(member) => members.push(member),
            None => {
                skipped += 1;
                log::debug!(
                    "Skipping member entry with unsupported name {:?}",
                    element.attribute(NAME_ATTRIBUTE)
                );
            }
        }
    }

    log::info!(
        "Extracted {} documented members from assembly '{}' ({} skipped)",
        members.len(),
        assembly,
        skipped
    );

    Ok(members)
}

/// Build the record for a single `member` element, `None` if its name does not decode
pub fn extract_member(element: &XmlElement, resolution_namespace: &str) -> Option<DocumentedMember> {
    let id = MemberId::parse(element.attribute(NAME_ATTRIBUTE)?)?;
    let mut member = DocumentedMember::new(id);

    // Childless elements serialize self-closing, which the wrapper strip would not remove
    if let Some(summary) = element.child(SUMMARY_ELEMENT).filter(|e| !e.is_empty()) {
        let rewritten = rewrite_markup(&summary.outer_xml(), SUMMARY_ELEMENT, resolution_namespace);
        member.summary = normalize_summary(&unescape_text(&rewritten));
    }

    member.remarks = child_text(element, REMARKS_ELEMENT);
    member.returns = child_text(element, RETURNS_ELEMENT);
    member.parameters = named_docs(element, PARAM_ELEMENT, resolution_namespace);
    member.type_parameters = named_docs(element, TYPEPARAM_ELEMENT, resolution_namespace);

    if let Some(example) = element.child(EXAMPLE_ELEMENT).filter(|e| !e.is_empty()) {
        let rewritten = rewrite_markup(&example.outer_xml(), EXAMPLE_ELEMENT, resolution_namespace);
        member.example = unescape_text(&strip_indentation(&rewritten)).trim().to_string();
    }

    Some(member)
}

/// Trimmed text value of the first child with the given name, empty if absent
fn child_text(element: &XmlElement, name: &str) -> String {
    element
        .child(name)
        .map(|child| child.text().trim().to_string())
        .unwrap_or_default()
}

/// Rewritten descriptions of `param` or `typeparam` children, first occurrence per name
fn named_docs(element: &XmlElement, child_name: &str, resolution_namespace: &str) -> NamedDocs {
    let mut docs = NamedDocs::new();
    for child in element.children_named(child_name) {
        let Some(name) = child.attribute(NAME_ATTRIBUTE) else {
            log::debug!("Ignoring <{}> without a name attribute", child_name);
            continue;
        };
        // Checked here so a duplicate's text is never rewritten
        if docs.contains(name) {
            continue;
        }
        let description = rewrite_markup(&child.inner_xml(), "", resolution_namespace);
        docs.insert_first(name, unescape_text(&description).trim());
    }
    docs
}

/// Undo the escaping applied when a fragment was serialized for rewriting
fn unescape_text(text: &str) -> String {
    unescape(text).map_or_else(|_| text.to_string(), Cow::into_owned)
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
