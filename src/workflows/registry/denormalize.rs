use super::domain::{MemberRecord, MergedRecord, OutputRow};
use tracing::{debug, info};

/// Expands each merged record into one row per electoral period.
///
/// Rows come out in record order, then period order. A member without any
/// period produces no row at all.
pub fn explode(records: Vec<MergedRecord>) -> Vec<OutputRow> {
    let capacity = records.iter().map(|r| r.member.periods.len()).sum();
    let mut rows = Vec::with_capacity(capacity);
    let mut dropped = 0usize;

    for record in records {
        let MergedRecord {
            member: MemberRecord { profile, periods },
            profession,
            is_stem,
        } = record;

        if periods.is_empty() {
            debug!(member_id = %profile.id, "member has no electoral periods; no rows emitted");
            dropped += 1;
            continue;
        }

        rows.extend(periods.into_iter().map(|period| OutputRow {
            profile: profile.clone(),
            profession: profession.clone(),
            is_stem: is_stem.clone(),
            period,
        }));
    }

    info!(rows = rows.len(), dropped, "electoral periods exploded");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::registry::domain::{ElectoralPeriod, MemberProfile};
    use pretty_assertions::assert_eq;

    fn period(term: &str) -> ElectoralPeriod {
        ElectoralPeriod {
            term_number: Some(term.to_string()),
            mandate_type: Some("Landesliste".to_string()),
            ..ElectoralPeriod::default()
        }
    }

    fn merged(id: &str, periods: Vec<ElectoralPeriod>) -> MergedRecord {
        MergedRecord {
            member: MemberRecord {
                profile: MemberProfile {
                    id: id.to_string(),
                    last_name: "Vogel".to_string(),
                    first_name: "Anna".to_string(),
                    occupation: Some("Lehrer".to_string()),
                    ..MemberProfile::default()
                },
                periods,
            },
            profession: Some("Teacher".to_string()),
            is_stem: Some("No".to_string()),
        }
    }

    #[test]
    fn one_row_per_period_with_shared_scalars() {
        let rows = explode(vec![merged(
            "1",
            vec![period("17"), period("18"), period("19")],
        )]);

        assert_eq!(rows.len(), 3);
        let terms: Vec<_> = rows
            .iter()
            .map(|row| row.period.term_number.as_deref())
            .collect();
        assert_eq!(terms, vec![Some("17"), Some("18"), Some("19")]);
        assert!(rows.iter().all(|row| row.profile == rows[0].profile));
        assert!(rows
            .iter()
            .all(|row| row.profession.as_deref() == Some("Teacher")));
    }

    #[test]
    fn member_without_periods_is_dropped() {
        let rows = explode(vec![merged("1", Vec::new())]);
        assert!(rows.is_empty());
    }

    #[test]
    fn row_count_is_sum_of_periods_in_record_order() {
        let rows = explode(vec![
            merged("a", vec![period("1")]),
            merged("b", Vec::new()),
            merged("c", vec![period("2"), period("3")]),
        ]);

        let ids: Vec<_> = rows.iter().map(|row| row.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "c"]);
    }
}
