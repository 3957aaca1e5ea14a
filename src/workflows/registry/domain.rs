/// Scalar fields of a member, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    Id,
    LastName,
    FirstName,
    NobleTitle,
    FormOfAddress,
    DateOfBirth,
    PlaceOfBirth,
    DateOfDeath,
    Gender,
    Religion,
    Occupation,
    Party,
}

impl MemberField {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Id,
            Self::LastName,
            Self::FirstName,
            Self::NobleTitle,
            Self::FormOfAddress,
            Self::DateOfBirth,
            Self::PlaceOfBirth,
            Self::DateOfDeath,
            Self::Gender,
            Self::Religion,
            Self::Occupation,
            Self::Party,
        ]
    }

    /// Internal label, as used by the variability audit.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::LastName => "Nachname",
            Self::FirstName => "Vorname",
            Self::NobleTitle => "Adelstitel",
            Self::FormOfAddress => "Anrede_Titel",
            Self::DateOfBirth => "Geburtsdatum",
            Self::PlaceOfBirth => "Geburtsort",
            Self::DateOfDeath => "Sterbedatum",
            Self::Gender => "Geschlecht",
            Self::Religion => "Religion",
            Self::Occupation => "Beruf",
            Self::Party => "Partei",
        }
    }
}

/// Fields of a single electoral term, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodField {
    Term,
    Start,
    End,
    Constituency,
    State,
    List,
    MandateType,
}

impl PeriodField {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Term,
            Self::Start,
            Self::End,
            Self::Constituency,
            Self::State,
            Self::List,
            Self::MandateType,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Term => "WP",
            Self::Start => "Von",
            Self::End => "Bis",
            Self::Constituency => "Wahlkreis",
            Self::State => "Bundesland",
            Self::List => "Liste",
            Self::MandateType => "Mandatsart",
        }
    }
}

/// Biographical and name data of one member. `id`, `last_name` and
/// `first_name` are always present once extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberProfile {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub noble_title: Option<String>,
    pub form_of_address: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub date_of_death: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub party: Option<String>,
}

impl MemberProfile {
    pub fn value(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Id => Some(self.id.as_str()),
            MemberField::LastName => Some(self.last_name.as_str()),
            MemberField::FirstName => Some(self.first_name.as_str()),
            MemberField::NobleTitle => self.noble_title.as_deref(),
            MemberField::FormOfAddress => self.form_of_address.as_deref(),
            MemberField::DateOfBirth => self.date_of_birth.as_deref(),
            MemberField::PlaceOfBirth => self.place_of_birth.as_deref(),
            MemberField::DateOfDeath => self.date_of_death.as_deref(),
            MemberField::Gender => self.gender.as_deref(),
            MemberField::Religion => self.religion.as_deref(),
            MemberField::Occupation => self.occupation.as_deref(),
            MemberField::Party => self.party.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectoralPeriod {
    pub term_number: Option<String>,
    pub term_start: Option<String>,
    pub term_end: Option<String>,
    pub constituency: Option<String>,
    pub state: Option<String>,
    pub list_name: Option<String>,
    pub mandate_type: Option<String>,
}

impl ElectoralPeriod {
    pub fn value(&self, field: PeriodField) -> Option<&str> {
        match field {
            PeriodField::Term => self.term_number.as_deref(),
            PeriodField::Start => self.term_start.as_deref(),
            PeriodField::End => self.term_end.as_deref(),
            PeriodField::Constituency => self.constituency.as_deref(),
            PeriodField::State => self.state.as_deref(),
            PeriodField::List => self.list_name.as_deref(),
            PeriodField::MandateType => self.mandate_type.as_deref(),
        }
    }
}

/// One legislator as read from the registry. Periods keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRecord {
    pub profile: MemberProfile,
    pub periods: Vec<ElectoralPeriod>,
}

/// A member after the profession left join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord {
    pub member: MemberRecord,
    pub profession: Option<String>,
    pub is_stem: Option<String>,
}

/// One member-per-term row of the flat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub profile: MemberProfile,
    pub profession: Option<String>,
    pub is_stem: Option<String>,
    pub period: ElectoralPeriod,
}

/// Every column of an [`OutputRow`], addressed by its internal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Member(MemberField),
    Profession,
    IsStem,
    Period(PeriodField),
}

impl Column {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Member(field) => field.label(),
            Self::Profession => "Profession",
            Self::IsStem => "is_stem",
            Self::Period(field) => field.label(),
        }
    }
}

impl OutputRow {
    pub fn value(&self, column: Column) -> Option<&str> {
        match column {
            Column::Member(field) => self.profile.value(field),
            Column::Profession => self.profession.as_deref(),
            Column::IsStem => self.is_stem.as_deref(),
            Column::Period(field) => self.period.value(field),
        }
    }
}
