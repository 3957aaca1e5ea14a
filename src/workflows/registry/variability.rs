use super::domain::{MemberField, MemberRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct values observed per member field. Audit only; nothing downstream reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldVariability {
    values: BTreeMap<MemberField, BTreeSet<String>>,
}

/// One audit line: a field and the distinct values seen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariabilityRecord<'a> {
    pub field_name: &'static str,
    pub distinct_values: &'a BTreeSet<String>,
}

impl FieldVariability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct_values(&self, field: MemberField) -> Option<&BTreeSet<String>> {
        self.values.get(&field)
    }

    /// Number of fields with at least one observed value.
    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    pub fn records(&self) -> impl Iterator<Item = VariabilityRecord<'_>> {
        self.values
            .iter()
            .map(|(field, distinct_values)| VariabilityRecord {
                field_name: field.label(),
                distinct_values,
            })
    }

    fn observe(&mut self, record: &MemberRecord) {
        for field in MemberField::ordered() {
            if let Some(value) = record.profile.value(field) {
                self.values
                    .entry(field)
                    .or_default()
                    .insert(value.to_owned());
            }
        }
    }
}

/// Folds the scalar fields of `records` into `variability` and hands it back.
pub fn collect_variability(
    records: &[MemberRecord],
    mut variability: FieldVariability,
) -> FieldVariability {
    for record in records {
        variability.observe(record);
    }
    variability
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::registry::domain::{ElectoralPeriod, MemberProfile};

    fn member(id: &str, party: Option<&str>) -> MemberRecord {
        MemberRecord {
            profile: MemberProfile {
                id: id.to_string(),
                last_name: "Schmidt".to_string(),
                first_name: "Helga".to_string(),
                party: party.map(str::to_string),
                ..MemberProfile::default()
            },
            periods: vec![ElectoralPeriod::default()],
        }
    }

    #[test]
    fn collects_distinct_values_and_skips_nulls() {
        let records = vec![
            member("1", Some("SPD")),
            member("2", Some("SPD")),
            member("3", None),
        ];
        let variability = collect_variability(&records, FieldVariability::new());

        let ids = variability
            .distinct_values(MemberField::Id)
            .expect("ids observed");
        assert_eq!(ids.len(), 3);
        assert_eq!(
            variability
                .distinct_values(MemberField::LastName)
                .expect("names observed")
                .len(),
            1
        );
        assert_eq!(
            variability
                .distinct_values(MemberField::Party)
                .expect("parties observed")
                .iter()
                .collect::<Vec<_>>(),
            vec!["SPD"]
        );
        assert!(variability.distinct_values(MemberField::Religion).is_none());
        assert_eq!(variability.field_count(), 4);
    }

    #[test]
    fn accumulates_across_batches_independent_of_order() {
        let first = vec![member("1", Some("CDU"))];
        let second = vec![member("2", Some("FDP"))];

        let forward = collect_variability(
            &second,
            collect_variability(&first, FieldVariability::new()),
        );
        let backward = collect_variability(
            &first,
            collect_variability(&second, FieldVariability::new()),
        );

        assert_eq!(forward, backward);
    }

    #[test]
    fn records_use_internal_labels() {
        let variability = collect_variability(&[member("1", None)], FieldVariability::new());
        let labels: Vec<_> = variability.records().map(|record| record.field_name).collect();
        assert_eq!(labels, vec!["ID", "Nachname", "Vorname"]);
    }
}
