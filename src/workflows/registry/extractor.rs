use super::document::{descendants_named, find_path, optional_text};
use super::domain::{ElectoralPeriod, MemberProfile, MemberRecord};
use super::RegistryError;
use roxmltree::{Document, Node};

/// Reads every `MDB` node of the registry into a [`MemberRecord`], in document order.
pub fn extract_members(document: &Document<'_>) -> Result<Vec<MemberRecord>, RegistryError> {
    descendants_named(document.root_element(), "MDB")
        .enumerate()
        .map(|(index, node)| extract_member(node, index + 1))
        .collect()
}

fn extract_member(node: Node<'_, '_>, position: usize) -> Result<MemberRecord, RegistryError> {
    let id = required_text(Some(node), "ID", "ID", position, None)?;

    // The first NAME block is the member's current name; later ones are history.
    let name = descendants_named(node, "NAME").next();
    let last_name = required_text(name, "NACHNAME", "NACHNAME", position, Some(id.as_str()))?;
    let first_name = required_text(name, "VORNAME", "VORNAME", position, Some(id.as_str()))?;

    let bio = find_path(node, "BIOGRAFISCHE_ANGABEN");
    let bio_text = |tag: &str| bio.and_then(|bio| optional_text(bio, tag));

    let profile = MemberProfile {
        noble_title: name.and_then(|name| optional_text(name, "ADEL")),
        form_of_address: name.and_then(|name| optional_text(name, "ANREDE_TITEL")),
        date_of_birth: bio_text("GEBURTSDATUM"),
        place_of_birth: bio_text("GEBURTSORT"),
        date_of_death: bio_text("STERBEDATUM"),
        gender: bio_text("GESCHLECHT"),
        religion: bio_text("RELIGION"),
        occupation: bio_text("BERUF"),
        party: bio_text("PARTEI_KURZ"),
        id,
        last_name,
        first_name,
    };

    let periods = descendants_named(node, "WAHLPERIODE")
        .map(extract_period)
        .collect();

    Ok(MemberRecord { profile, periods })
}

fn extract_period(node: Node<'_, '_>) -> ElectoralPeriod {
    ElectoralPeriod {
        term_number: optional_text(node, "WP"),
        term_start: optional_text(node, "MDBWP_VON"),
        term_end: optional_text(node, "MDBWP_BIS"),
        constituency: optional_text(node, "WKR_NAME"),
        state: optional_text(node, "WKR_LAND"),
        list_name: optional_text(node, "LISTE"),
        mandate_type: optional_text(node, "MANDATSART"),
    }
}

fn required_text(
    node: Option<Node<'_, '_>>,
    path: &str,
    field: &'static str,
    position: usize,
    member_id: Option<&str>,
) -> Result<String, RegistryError> {
    node.and_then(|node| optional_text(node, path))
        .ok_or_else(|| RegistryError::MissingRequiredField {
            field,
            position,
            member_id: member_id.map(str::to_owned),
        })
}
