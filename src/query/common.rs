//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! and the [`QueryString`] serializer.

use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::errors::Error;
use crate::types::{DateFilter, IdFilter, SortField, SortOrder};
use crate::validation;

/// Trait implemented by all query builders. Provides validation, URL
/// serialization, and shared builder methods for sorting and pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. Callers run [`Query::validate`] first; serialization
    /// itself never rejects input.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a shared reference to the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Returns a mutable reference to the common query fields.
    fn common_mut(&mut self) -> &mut QueryCommon;

    /// Checks every runtime-validated parameter, surfacing the first
    /// violation before any network use.
    fn validate(&self) -> Result<(), Error> {
        validation::validate_limit(self.common().limit)
    }

    /// Sets the field to sort results by.
    fn with_sort_field(mut self, sort_field: SortField) -> Self
    where
        Self: Sized,
    {
        self.common_mut().sort_field = Some(sort_field);
        self
    }

    /// Sets the sort order (ascending or descending).
    fn with_sort_order(mut self, sort_order: SortOrder) -> Self
    where
        Self: Sized,
    {
        self.common_mut().sort_order = sort_order;
        self
    }

    /// Sets the maximum number of results (the API accepts 0-1000).
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.common_mut().limit = limit;
        self
    }

    /// Sets the offset of the first result.
    fn with_offset(mut self, offset: i64) -> Self
    where
        Self: Sized,
    {
        self.common_mut().offset = offset;
        self
    }
}

/// Fields shared by all query types: sorting and pagination.
#[derive(Clone, Copy)]
pub struct QueryCommon {
    /// Field to sort by. `None` uses the API default.
    pub sort_field: Option<SortField>,
    /// Sort order. Defaults to ascending.
    pub sort_order: SortOrder,
    /// Maximum results per response (0-1000). Defaults to 25.
    pub limit: i64,
    /// Offset of the first result. Defaults to 0.
    pub offset: i64,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            sort_field: None,
            sort_order: SortOrder::Asc,
            limit: 25,
            offset: 0,
        }
    }
}

impl QueryCommon {
    /// Appends the sorting and pagination parameters. `sortorder`, `limit`,
    /// and `offset` always serialize; `sortfield` only when set.
    pub(crate) fn append_to(&self, query: &mut QueryString) {
        if let Some(sort_field) = self.sort_field {
            query.append("sortfield", &sort_field.to_string());
        }
        query.append("sortorder", &self.sort_order.to_string());
        query.append("limit", &self.limit.to_string());
        query.append("offset", &self.offset.to_string());
    }
}

/// Ordered accumulator for the outgoing query string.
///
/// The CDO dialect joins the elements of a multi-value filter with a literal
/// `&` inside one query value, so pairs are assembled by hand: every value is
/// form-encoded, and only the element joiner introduced by
/// [`QueryString::append_id`] stays unescaped. An `&` inside any single value
/// reaches the wire as `%26`.
#[derive(Default)]
pub(crate) struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    /// Appends one `key=value` pair, form-encoding the value.
    pub(crate) fn append(&mut self, key: &str, value: &str) {
        self.pairs.push(format!("{}={}", key, encode(value)));
    }

    /// Appends a multi-value id filter: each element is encoded on its own
    /// and the elements are joined with a literal `&`, which the API reads
    /// as an OR of the ids under the one key.
    pub(crate) fn append_id(&mut self, key: &str, filter: &IdFilter) {
        let joined = filter
            .as_slice()
            .iter()
            .map(|id| encode(id))
            .collect::<Vec<_>>()
            .join("&");
        self.pairs.push(format!("{}={}", key, joined));
    }

    /// Appends a date filter in its canonical wire form.
    pub(crate) fn append_date(&mut self, key: &str, date: &DateFilter, include_time: bool) {
        self.append(key, &date.format(include_time));
    }

    /// Applies the assembled query string to the URL. An empty accumulator
    /// leaves the URL without a query component.
    pub(crate) fn apply(self, url: &Url) -> Url {
        let mut url = url.clone();
        if self.pairs.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.pairs.join("&")));
        }
        url
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn plain_values_are_form_encoded() {
        let mut query = QueryString::default();
        query.append("extent", "40,-74 41,-73");
        let url = query.apply(&base_url());
        assert_eq!(url.query().unwrap(), "extent=40%2C-74+41%2C-73");
    }

    #[test]
    fn joined_ids_keep_literal_ampersand() {
        let mut query = QueryString::default();
        query.append_id("datasetid", &IdFilter::from(vec!["GHCND", "GSOM"]));
        let url = query.apply(&base_url());
        assert_eq!(url.query().unwrap(), "datasetid=GHCND&GSOM");
    }

    #[test]
    fn ampersand_inside_one_id_stays_encoded() {
        let mut query = QueryString::default();
        query.append_id("stationid", &IdFilter::from(vec!["A&B", "C"]));
        let url = query.apply(&base_url());
        assert_eq!(url.query().unwrap(), "stationid=A%26B&C");
    }

    #[test]
    fn empty_accumulator_yields_no_query() {
        let url = QueryString::default().apply(&base_url());
        assert_eq!(url.query(), None);
    }
}
