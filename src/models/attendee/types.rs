use serde::{Deserialize, Serialize};

use super::codes;

/// A stored registration row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub year: i16,
    pub spec: i16,
    pub competition: i16,
    pub reason: String,
    pub comments: String,
    pub expectations: String,
    #[sqlx(rename = "teamname")]
    pub team_name: String,
    pub experience: String,
}

/// Public JSON shape of an attendee: codes replaced by labels, no id.
/// A code with no label leaves its key out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendeeView {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<&'static str>,
    pub why: String,
    pub comments: String,
    pub expectations: String,
    pub teamname: String,
    pub experience: String,
}

impl From<Attendee> for AttendeeView {
    fn from(a: Attendee) -> Self {
        AttendeeView {
            name: a.name,
            email: a.email,
            phone: a.phone,
            year: codes::year_label(a.year),
            spec: codes::spec_label(a.spec),
            competition: codes::competition_label(a.competition),
            why: a.reason,
            comments: a.comments,
            expectations: a.expectations,
            teamname: a.team_name,
            experience: a.experience,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, name: &str, email: &str, year: i16, spec: i16, competition: i16) -> Attendee {
    Attendee {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        year,
        spec,
        competition,
        reason: "learn".to_string(),
        comments: String::new(),
        expectations: "fun".to_string(),
        team_name: "Byte Me".to_string(),
        experience: "none".to_string(),
    }
}
