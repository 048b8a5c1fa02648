use serde::Deserialize;

use super::types::Attendee;

const BASE_SELECT: &str = "SELECT * FROM attendees";

/// Raw query-string parameters of the attendee list routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendeeQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub year: Option<String>,
    pub spec: Option<String>,
    pub competition: Option<String>,
}

/// A bind value for the generated statement, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Code(i64),
}

/// Parsed filter. Empty text and non-numeric codes are dropped, not rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendeeFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub year: Option<i64>,
    pub spec: Option<i64>,
    pub competition: Option<i64>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Read the leading base-10 integer of `raw`: leading whitespace and one
/// optional sign are accepted, anything after the digits is ignored.
/// `None` when no digit follows. Values beyond `i64` saturate.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(d - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    seen.then_some(value)
}

fn code(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(leading_int)
}

impl From<&AttendeeQuery> for AttendeeFilter {
    fn from(q: &AttendeeQuery) -> Self {
        AttendeeFilter {
            name: non_empty(&q.name),
            email: non_empty(&q.email),
            year: code(&q.year),
            spec: code(&q.spec),
            competition: code(&q.competition),
        }
    }
}

impl AttendeeFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.year.is_none()
            && self.spec.is_none()
            && self.competition.is_none()
    }

    /// Build a parameterized SELECT with one `col = $N` per active field.
    /// Values are never interpolated into the SQL text.
    pub fn to_select(&self) -> (String, Vec<FilterValue>) {
        let mut conditions: Vec<String> = vec![];
        let mut values: Vec<FilterValue> = vec![];

        let mut add = |column: &str, value: FilterValue| {
            values.push(value);
            conditions.push(format!("{column} = ${}", values.len()));
        };

        if let Some(name) = &self.name {
            add("name", FilterValue::Text(name.clone()));
        }
        if let Some(email) = &self.email {
            add("email", FilterValue::Text(email.clone()));
        }
        if let Some(year) = self.year {
            add("year", FilterValue::Code(year));
        }
        if let Some(spec) = self.spec {
            add("spec", FilterValue::Code(spec));
        }
        if let Some(competition) = self.competition {
            add("competition", FilterValue::Code(competition));
        }

        let mut sql = BASE_SELECT.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY id");
        (sql, values)
    }

    /// In-memory predicate: `name` is a case-insensitive substring match,
    /// every other field is exact.
    pub fn matches(&self, attendee: &Attendee) -> bool {
        if let Some(name) = &self.name {
            if !attendee.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if self.email.as_ref().is_some_and(|email| attendee.email != *email) {
            return false;
        }
        if self.year.is_some_and(|y| i64::from(attendee.year) != y) {
            return false;
        }
        if self.spec.is_some_and(|s| i64::from(attendee.spec) != s) {
            return false;
        }
        if self.competition.is_some_and(|c| i64::from(attendee.competition) != c) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendee::types::sample;

    fn query(pairs: &[(&str, &str)]) -> AttendeeQuery {
        let mut q = AttendeeQuery::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "name" => q.name = v,
                "email" => q.email = v,
                "year" => q.year = v,
                "spec" => q.spec = v,
                "competition" => q.competition = v,
                _ => {}
            }
        }
        q
    }

    #[test]
    fn no_params_selects_everything() {
        let filter = AttendeeFilter::from(&AttendeeQuery::default());
        assert!(filter.is_empty());

        let (sql, values) = filter.to_select();
        assert_eq!(sql, "SELECT * FROM attendees ORDER BY id");
        assert!(values.is_empty());
    }

    #[test]
    fn single_numeric_filter() {
        let (sql, values) = AttendeeFilter::from(&query(&[("year", "2")])).to_select();
        assert_eq!(sql, "SELECT * FROM attendees WHERE year = $1 ORDER BY id");
        assert_eq!(values, vec![FilterValue::Code(2)]);
    }

    #[test]
    fn all_filters_are_anded_in_fixed_order() {
        let q = query(&[
            ("competition", "1"),
            ("email", "a@x.com"),
            ("spec", "3"),
            ("name", "Ann"),
            ("year", "0"),
        ]);
        let (sql, values) = AttendeeFilter::from(&q).to_select();
        assert_eq!(
            sql,
            "SELECT * FROM attendees WHERE name = $1 AND email = $2 AND year = $3 \
             AND spec = $4 AND competition = $5 ORDER BY id"
        );
        assert_eq!(
            values,
            vec![
                FilterValue::Text("Ann".into()),
                FilterValue::Text("a@x.com".into()),
                FilterValue::Code(0),
                FilterValue::Code(3),
                FilterValue::Code(1),
            ]
        );
    }

    #[test]
    fn non_numeric_codes_are_ignored() {
        let filter = AttendeeFilter::from(&query(&[("year", "senior"), ("spec", ""), ("competition", "2")]));
        assert_eq!(filter.year, None);
        assert_eq!(filter.spec, None);
        assert_eq!(filter.competition, Some(2));

        let (sql, _) = filter.to_select();
        assert_eq!(sql, "SELECT * FROM attendees WHERE competition = $1 ORDER BY id");
    }

    #[test]
    fn out_of_range_code_still_filters() {
        let filter = AttendeeFilter::from(&query(&[("year", "70000")]));
        assert_eq!(filter.year, Some(70000));

        let (sql, values) = filter.to_select();
        assert_eq!(sql, "SELECT * FROM attendees WHERE year = $1 ORDER BY id");
        assert_eq!(values, vec![FilterValue::Code(70000)]);
        assert!(!filter.matches(&sample(1, "Ann", "a@x.com", 1, 0, 0)));
    }

    #[test]
    fn code_with_trailing_text_uses_leading_digits() {
        let filter = AttendeeFilter::from(&query(&[("year", "2abc"), ("spec", " 3 ")]));
        assert_eq!(filter.year, Some(2));
        assert_eq!(filter.spec, Some(3));

        let (sql, values) = filter.to_select();
        assert_eq!(sql, "SELECT * FROM attendees WHERE year = $1 AND spec = $2 ORDER BY id");
        assert_eq!(values, vec![FilterValue::Code(2), FilterValue::Code(3)]);
    }

    #[test]
    fn leading_int_reads_like_parse_int() {
        assert_eq!(leading_int("12"), Some(12));
        assert_eq!(leading_int("12abc"), Some(12));
        assert_eq!(leading_int("  7"), Some(7));
        assert_eq!(leading_int("-4x"), Some(-4));
        assert_eq!(leading_int("+9"), Some(9));
        assert_eq!(leading_int("1.5"), Some(1));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn empty_text_params_are_ignored() {
        let filter = AttendeeFilter::from(&query(&[("name", ""), ("email", "")]));
        assert!(filter.is_empty());
    }

    #[test]
    fn values_never_reach_the_sql_text() {
        let q = query(&[("name", "x'; DROP TABLE attendees; --")]);
        let (sql, values) = AttendeeFilter::from(&q).to_select();
        assert!(!sql.contains("DROP"));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let filter = AttendeeFilter::from(&query(&[("name", "ALI")]));
        assert!(filter.matches(&sample(1, "Alice", "a@x.com", 0, 0, 0)));
        assert!(filter.matches(&sample(2, "Natalie", "n@x.com", 0, 0, 0)));
        assert!(!filter.matches(&sample(3, "Bob", "b@x.com", 0, 0, 0)));
    }

    #[test]
    fn email_and_codes_match_exactly() {
        let filter = AttendeeFilter::from(&query(&[("email", "a@x.com"), ("year", "2")]));
        assert!(filter.matches(&sample(1, "Ann", "a@x.com", 2, 0, 0)));
        assert!(!filter.matches(&sample(2, "Ann", "A@x.com", 2, 0, 0)));
        assert!(!filter.matches(&sample(3, "Ann", "a@x.com", 1, 0, 0)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = AttendeeFilter::default();
        assert!(filter.matches(&sample(1, "Ann", "a@x.com", 4, 4, 2)));
    }
}
