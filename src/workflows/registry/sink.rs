use super::domain::{Column, MemberField, OutputRow, PeriodField};
use super::variability::FieldVariability;
use super::RegistryError;
use std::io::Write;
use std::path::Path;

/// Internal column → public column name. Iteration order is the output column order.
pub static COLUMN_NAME_MAP: [(Column, &str); 21] = [
    (Column::Member(MemberField::Id), "id"),
    (Column::Member(MemberField::LastName), "last_name"),
    (Column::Member(MemberField::FirstName), "first_name"),
    (Column::Member(MemberField::NobleTitle), "noble_title"),
    (Column::Member(MemberField::FormOfAddress), "form_of_address"),
    (Column::Member(MemberField::DateOfBirth), "date_of_birth"),
    (Column::Member(MemberField::PlaceOfBirth), "place_of_birth"),
    (Column::Member(MemberField::DateOfDeath), "date_of_death"),
    (Column::Member(MemberField::Gender), "gender"),
    (Column::Member(MemberField::Religion), "religion"),
    (Column::Member(MemberField::Occupation), "occupation"),
    (Column::Member(MemberField::Party), "party"),
    (Column::Profession, "profession"),
    (Column::IsStem, "is_stem"),
    (Column::Period(PeriodField::Term), "electoral_term"),
    (Column::Period(PeriodField::Start), "term_start"),
    (Column::Period(PeriodField::End), "term_end"),
    (Column::Period(PeriodField::Constituency), "constituency"),
    (Column::Period(PeriodField::State), "state"),
    (Column::Period(PeriodField::List), "list"),
    (Column::Period(PeriodField::MandateType), "mandate_type"),
];

pub fn public_header() -> impl Iterator<Item = &'static str> {
    COLUMN_NAME_MAP.iter().map(|(_, public)| *public)
}

/// Values of `row` in public column order; nulls become empty cells.
pub fn public_record(row: &OutputRow) -> Vec<&str> {
    COLUMN_NAME_MAP
        .iter()
        .map(|(column, _)| row.value(*column).unwrap_or(""))
        .collect()
}

pub fn write_rows<W: Write>(writer: W, rows: &[OutputRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(public_header())?;
    for row in rows {
        csv_writer.write_record(public_record(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the `Key,Values` audit table, values joined by `", "`.
pub fn write_variability<W: Write>(
    writer: W,
    variability: &FieldVariability,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Key", "Values"])?;
    for record in variability.records() {
        let values = record
            .distinct_values
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        csv_writer.write_record([record.field_name, values.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_rows_to_path(path: &Path, rows: &[OutputRow]) -> Result<(), RegistryError> {
    create_file(path)
        .and_then(|file| write_rows(file, rows))
        .map_err(|source| sink_error(path, source))
}

pub fn write_variability_to_path(
    path: &Path,
    variability: &FieldVariability,
) -> Result<(), RegistryError> {
    create_file(path)
        .and_then(|file| write_variability(file, variability))
        .map_err(|source| sink_error(path, source))
}

fn create_file(path: &Path) -> Result<std::fs::File, csv::Error> {
    std::fs::File::create(path).map_err(csv::Error::from)
}

fn sink_error(path: &Path, source: csv::Error) -> RegistryError {
    RegistryError::SinkWrite {
        path: path.to_path_buf(),
        source,
    }
}
