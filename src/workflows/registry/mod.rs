//! Flattens the member registry into one row per member and electoral term.
//!
//! Stages run strictly in order: [`extractor`] reads the XML document,
//! [`variability`] records the distinct values per field for auditing,
//! [`professions`] left-joins the translated occupation, [`denormalize`]
//! explodes the periods and [`sink`] renames and writes the flat table.

mod document;
pub mod denormalize;
pub mod domain;
pub mod extractor;
pub mod professions;
pub mod sink;
pub mod variability;

use crate::config::PipelineConfig;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub use domain::{
    Column, ElectoralPeriod, MemberField, MemberProfile, MemberRecord, MergedRecord, OutputRow,
    PeriodField,
};
pub use professions::{ProfessionLookup, ProfessionMapping};
pub use variability::{FieldVariability, VariabilityRecord};

/// Which input a parse failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Registry,
    Professions,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Registry => write!(f, "member registry"),
            SourceKind::Professions => write!(f, "profession table"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceParseError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(
        "member #{position}{} is missing required field {field}",
        .member_id.as_deref().map(|id| format!(" (ID {id})")).unwrap_or_default()
    )]
    MissingRequiredField {
        field: &'static str,
        position: usize,
        member_id: Option<String>,
    },
    #[error("failed to parse {input}: {source}")]
    SourceParse {
        input: SourceKind,
        #[source]
        source: SourceParseError,
    },
    #[error("failed to write {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl RegistryError {
    fn parse(input: SourceKind, source: impl Into<SourceParseError>) -> Self {
        Self::SourceParse {
            input,
            source: source.into(),
        }
    }
}

/// Everything the in-memory stages produce.
#[derive(Debug, Clone)]
pub struct FlattenOutput {
    pub rows: Vec<OutputRow>,
    pub variability: FieldVariability,
    pub members: usize,
}

/// Counts reported after a run has written its outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub members: usize,
    pub rows: usize,
    pub audited_fields: usize,
}

/// Runs extraction, audit, merge and explode over in-memory inputs.
pub fn flatten<R: Read>(
    registry_xml: &str,
    professions: R,
) -> Result<FlattenOutput, RegistryError> {
    let document = document::parse_document(registry_xml)
        .map_err(|err| RegistryError::parse(SourceKind::Registry, err))?;
    let lookup = ProfessionLookup::from_reader(professions)
        .map_err(|err| RegistryError::parse(SourceKind::Professions, err))?;

    let members = extractor::extract_members(&document)?;
    info!(members = members.len(), "member records extracted");

    let variability = variability::collect_variability(&members, FieldVariability::new());
    info!(
        fields = variability.field_count(),
        "field variability collected"
    );

    let member_count = members.len();
    let merged = lookup.merge(members);
    let rows = denormalize::explode(merged);

    Ok(FlattenOutput {
        rows,
        variability,
        members: member_count,
    })
}

/// Reads both inputs from disk, flattens them and writes the table and audit files.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary, RegistryError> {
    info!(path = %config.registry_path.display(), "reading member registry");
    let registry_xml = std::fs::read_to_string(&config.registry_path)
        .map_err(|err| RegistryError::parse(SourceKind::Registry, err))?;

    info!(path = %config.professions_path.display(), "reading profession table");
    let professions = std::fs::File::open(&config.professions_path)
        .map_err(|err| RegistryError::parse(SourceKind::Professions, err))?;

    let output = flatten(&registry_xml, professions)?;

    sink::write_rows_to_path(&config.output_path, &output.rows)?;
    info!(
        path = %config.output_path.display(),
        rows = output.rows.len(),
        "flat table written"
    );

    sink::write_variability_to_path(&config.variability_path, &output.variability)?;
    info!(path = %config.variability_path.display(), "variability audit written");

    Ok(PipelineSummary {
        members: output.members,
        rows: output.rows.len(),
        audited_fields: output.variability.field_count(),
    })
}
