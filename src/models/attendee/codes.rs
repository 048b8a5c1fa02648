//! Static code tables for the integer-coded attendee columns.
//!
//! The stored value is the index into the table. Codes outside a table decode
//! to `None`, which the public view renders as JSON `null`.

pub static YEAR_LABELS: &[&str] = &["Freshman", "Sophomore", "Junior", "Senior", "Graduate"];

pub static SPEC_LABELS: &[&str] = &[
    "Computer Science",
    "Computer Engineering",
    "Electrical Engineering",
    "Information Systems",
    "Other",
];

pub static COMPETITION_LABELS: &[&str] = &["Individual", "Team", "Spectator"];

fn lookup(table: &'static [&'static str], code: i16) -> Option<&'static str> {
    usize::try_from(code).ok().and_then(|i| table.get(i).copied())
}

pub fn year_label(code: i16) -> Option<&'static str> {
    lookup(YEAR_LABELS, code)
}

pub fn spec_label(code: i16) -> Option<&'static str> {
    lookup(SPEC_LABELS, code)
}

pub fn competition_label(code: i16) -> Option<&'static str> {
    lookup(COMPETITION_LABELS, code)
}
