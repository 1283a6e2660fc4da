//! Parameter types shared by the query builders.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::Error;

/// One or more resource identifiers.
///
/// The CDO API expresses a multi-value filter as a single query value whose
/// elements are joined by a literal `&` (e.g. `datasetid=GHCND&GSOM`), not as
/// repeated keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdFilter {
    /// A single identifier.
    Single(String),
    /// An ordered list of identifiers, ORed together by the API.
    Many(Vec<String>),
}

impl IdFilter {
    /// The identifiers in caller order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            IdFilter::Single(id) => std::slice::from_ref(id),
            IdFilter::Many(ids) => ids.as_slice(),
        }
    }

    /// The wire value: elements joined by the literal `&` separator.
    pub fn join(&self) -> String {
        match self {
            IdFilter::Single(id) => id.clone(),
            IdFilter::Many(ids) => ids.join("&"),
        }
    }
}

impl From<&str> for IdFilter {
    fn from(id: &str) -> Self {
        IdFilter::Single(id.to_string())
    }
}

impl From<String> for IdFilter {
    fn from(id: String) -> Self {
        IdFilter::Single(id)
    }
}

impl From<Vec<String>> for IdFilter {
    fn from(ids: Vec<String>) -> Self {
        IdFilter::Many(ids)
    }
}

impl From<Vec<&str>> for IdFilter {
    fn from(ids: Vec<&str>) -> Self {
        IdFilter::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IdFilter {
    fn from(ids: &[&str]) -> Self {
        IdFilter::Many(ids.iter().map(|id| id.to_string()).collect())
    }
}

/// A date or date-time filter value.
///
/// Built from chrono values via `From`, or parsed from ISO-8601 strings
/// (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`) via `FromStr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateFilter {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateFilter {
    /// The canonical wire value: `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM:SS` when
    /// `include_time` is set. A bare date gains a midnight time component; a
    /// date-time formatted without time keeps only its date part.
    pub fn format(&self, include_time: bool) -> String {
        match (self, include_time) {
            (DateFilter::Date(date), false) => date.format("%Y-%m-%d").to_string(),
            (DateFilter::Date(date), true) => date.format("%Y-%m-%dT00:00:00").to_string(),
            (DateFilter::DateTime(dt), false) => dt.format("%Y-%m-%d").to_string(),
            (DateFilter::DateTime(dt), true) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

impl From<NaiveDate> for DateFilter {
    fn from(date: NaiveDate) -> Self {
        DateFilter::Date(date)
    }
}

impl From<NaiveDateTime> for DateFilter {
    fn from(dt: NaiveDateTime) -> Self {
        DateFilter::DateTime(dt)
    }
}

impl FromStr for DateFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(dt) = trimmed.parse::<NaiveDateTime>() {
            return Ok(DateFilter::DateTime(dt));
        }
        trimmed.parse::<NaiveDate>().map(DateFilter::Date).map_err(|_| {
            Error::Validation(format!(
                "'{}' must be an ISO-8601 date or date-time",
                trimmed
            ))
        })
    }
}

/// Field used to sort API results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    MinDate,
    MaxDate,
    DataCoverage,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortField::Id => "id",
                SortField::Name => "name",
                SortField::MinDate => "mindate",
                SortField::MaxDate => "maxdate",
                SortField::DataCoverage => "datacoverage",
            }
        )
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "mindate" => Ok(SortField::MinDate),
            "maxdate" => Ok(SortField::MaxDate),
            "datacoverage" => Ok(SortField::DataCoverage),
            _ => Err(Error::Validation(
                "sort_field must be one of: id, name, mindate, maxdate, datacoverage".to_string(),
            )),
        }
    }
}

/// Sort order for API results. The API default is ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::Validation(
                "sort_order must be one of: asc, desc".to_string(),
            )),
        }
    }
}

/// Measurement units for observational data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    Standard,
    #[default]
    Metric,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::Standard => "standard",
                Units::Metric => "metric",
            }
        )
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            _ => Err(Error::Validation(
                "units must be one of: standard, metric".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- IdFilter --

    #[test]
    fn join_single_passes_through() {
        assert_eq!(IdFilter::from("GHCND").join(), "GHCND");
    }

    #[test]
    fn join_many_uses_ampersand() {
        assert_eq!(IdFilter::from(vec!["GHCND", "GSOM"]).join(), "GHCND&GSOM");
    }

    #[test]
    fn join_empty_list_is_empty_string() {
        assert_eq!(IdFilter::Many(Vec::new()).join(), "");
    }

    #[test]
    fn as_slice_single() {
        let filter = IdFilter::from("GHCND");
        assert_eq!(filter.as_slice(), ["GHCND".to_string()]);
    }

    // -- DateFilter --

    #[test]
    fn date_parses_and_formats() {
        let date: DateFilter = "2023-01-15".parse().unwrap();
        assert_eq!(date.format(false), "2023-01-15");
    }

    #[test]
    fn date_gains_midnight_with_time() {
        let date: DateFilter = "2023-01-15".parse().unwrap();
        assert_eq!(date.format(true), "2023-01-15T00:00:00");
    }

    #[test]
    fn datetime_keeps_time() {
        let date: DateFilter = "2023-01-15T10:30:00".parse().unwrap();
        assert_eq!(date.format(true), "2023-01-15T10:30:00");
    }

    #[test]
    fn datetime_truncates_without_time() {
        let date: DateFilter = "2023-01-15T10:30:00".parse().unwrap();
        assert_eq!(date.format(false), "2023-01-15");
    }

    #[test]
    fn date_from_chrono_value() {
        let date = DateFilter::from(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(date.format(false), "2023-01-15");
    }

    #[test]
    fn date_with_whitespace_trimmed() {
        let date: DateFilter = "  2023-01-15  ".parse().unwrap();
        assert_eq!(date.format(false), "2023-01-15");
    }

    #[test]
    fn date_rejects_non_iso_order() {
        assert!("01-15-2023".parse::<DateFilter>().is_err());
    }

    #[test]
    fn date_rejects_garbage() {
        assert!("not-a-date".parse::<DateFilter>().is_err());
        assert!("".parse::<DateFilter>().is_err());
    }

    #[test]
    fn date_rejects_invalid_values() {
        assert!("2023-13-01".parse::<DateFilter>().is_err());
        assert!("2023-02-30".parse::<DateFilter>().is_err());
    }

    // -- Enum parsing --

    #[test]
    fn sort_field_round_trips() {
        for token in ["id", "name", "mindate", "maxdate", "datacoverage"] {
            assert_eq!(token.parse::<SortField>().unwrap().to_string(), token);
        }
    }

    #[test]
    fn sort_field_rejects_unknown() {
        assert!("invalid".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_order_round_trips() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn sort_order_rejects_unknown() {
        assert!("ascending".parse::<SortOrder>().is_err());
        assert!("ASC".parse::<SortOrder>().is_err());
    }

    #[test]
    fn units_round_trips() {
        assert_eq!("standard".parse::<Units>().unwrap(), Units::Standard);
        assert_eq!("metric".parse::<Units>().unwrap(), Units::Metric);
    }

    #[test]
    fn units_rejects_unknown() {
        assert!("imperial".parse::<Units>().is_err());
    }
}
