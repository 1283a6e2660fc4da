use url::Url;

use crate::types::{DateFilter, IdFilter};

use super::common::{Query, QueryCommon, QueryString};

/// Filters for the `locationcategories` catalog endpoint.
#[derive(Default)]
pub struct LocationCategoryQuery {
    pub common: QueryCommon,
    pub dataset_id: Option<IdFilter>,
    pub start_date: Option<DateFilter>,
    pub end_date: Option<DateFilter>,
}

impl Query for LocationCategoryQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut query = QueryString::default();
        if let Some(dataset_id) = &self.dataset_id {
            query.append_id("datasetid", dataset_id);
        }
        if let Some(start_date) = &self.start_date {
            query.append_date("startdate", start_date, false);
        }
        if let Some(end_date) = &self.end_date {
            query.append_date("enddate", end_date, false);
        }
        self.common.append_to(&mut query);
        query.apply(url)
    }
}

impl LocationCategoryQuery {
    pub fn with_dataset_id(mut self, dataset_id: impl Into<IdFilter>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }
    pub fn with_start_date(mut self, start_date: impl Into<DateFilter>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }
    pub fn with_end_date(mut self, end_date: impl Into<DateFilter>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }
}
