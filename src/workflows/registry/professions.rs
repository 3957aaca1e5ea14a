use super::domain::{MemberRecord, MergedRecord};
use super::SourceParseError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use tracing::{info, warn};

const OCCUPATION_COLUMN: &str = "German Profession";
const PROFESSION_COLUMN: &str = "English Translation";
const STEM_COLUMN: &str = "STEM";

/// One translation row of the profession lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ProfessionMapping {
    #[serde(rename = "German Profession")]
    pub occupation: Option<String>,
    #[serde(rename = "English Translation")]
    pub profession: Option<String>,
    #[serde(rename = "STEM")]
    pub is_stem: Option<String>,
}

/// Reads the lookup table, keeping only the three join columns.
pub fn parse_mappings<R: Read>(reader: R) -> Result<Vec<ProfessionMapping>, SourceParseError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in [OCCUPATION_COLUMN, PROFESSION_COLUMN, STEM_COLUMN] {
        if !headers.iter().any(|header| header == column) {
            return Err(SourceParseError::MissingColumn(column));
        }
    }

    let mut mappings = Vec::new();
    for record in csv_reader.deserialize::<ProfessionMapping>() {
        mappings.push(record?);
    }
    Ok(mappings)
}

/// Drops exact duplicate rows, keeping the first occurrence of each.
pub fn dedup_mappings(mappings: Vec<ProfessionMapping>) -> Vec<ProfessionMapping> {
    let mut seen = HashSet::with_capacity(mappings.len());
    mappings
        .into_iter()
        .filter(|mapping| seen.insert(mapping.clone()))
        .collect()
}

/// Deduplicated lookup keyed on the German occupation label.
#[derive(Debug, Clone, Default)]
pub struct ProfessionLookup {
    mappings: Vec<ProfessionMapping>,
    by_occupation: HashMap<String, usize>,
    residual_duplicates: usize,
}

impl ProfessionLookup {
    pub fn new(mappings: Vec<ProfessionMapping>) -> Self {
        let mappings = dedup_mappings(mappings);
        let mut by_occupation = HashMap::with_capacity(mappings.len());
        let mut residual_duplicates = 0;

        for (index, mapping) in mappings.iter().enumerate() {
            let Some(occupation) = mapping.occupation.as_ref() else {
                continue;
            };
            if by_occupation.contains_key(occupation) {
                residual_duplicates += 1;
                continue;
            }
            by_occupation.insert(occupation.clone(), index);
        }

        if residual_duplicates > 0 {
            warn!(
                residual_duplicates,
                "profession table has conflicting rows for the same occupation; first match wins"
            );
        }

        Self {
            mappings,
            by_occupation,
            residual_duplicates,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceParseError> {
        parse_mappings(reader).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Rows sharing an occupation with an earlier, different row.
    pub fn residual_duplicates(&self) -> usize {
        self.residual_duplicates
    }

    pub fn lookup(&self, occupation: &str) -> Option<&ProfessionMapping> {
        self.by_occupation
            .get(occupation)
            .map(|&index| &self.mappings[index])
    }

    /// Left join on occupation. Every member comes back, in input order.
    pub fn merge(&self, members: Vec<MemberRecord>) -> Vec<MergedRecord> {
        let mut matched = 0usize;
        let merged: Vec<MergedRecord> = members
            .into_iter()
            .map(|member| {
                let mapping = member
                    .profile
                    .occupation
                    .as_deref()
                    .and_then(|occupation| self.lookup(occupation));
                if mapping.is_some() {
                    matched += 1;
                }
                MergedRecord {
                    profession: mapping.and_then(|m| m.profession.clone()),
                    is_stem: mapping.and_then(|m| m.is_stem.clone()),
                    member,
                }
            })
            .collect();

        info!(
            members = merged.len(),
            matched,
            unmatched = merged.len() - matched,
            "merged with profession data"
        );
        merged
    }
}
