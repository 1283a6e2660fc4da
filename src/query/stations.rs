use url::Url;

use crate::types::{DateFilter, IdFilter};

use super::common::{Query, QueryCommon, QueryString};

/// Filters for the `stations` catalog endpoint.
#[derive(Default)]
pub struct StationQuery {
    pub common: QueryCommon,
    pub dataset_id: Option<IdFilter>,
    pub data_type_id: Option<IdFilter>,
    pub data_category_id: Option<IdFilter>,
    pub location_id: Option<IdFilter>,
    pub start_date: Option<DateFilter>,
    pub end_date: Option<DateFilter>,
    /// Geographic bounding box, e.g. `"47.5204,-122.2047,47.6139,-122.1065"`.
    pub extent: Option<String>,
}

impl Query for StationQuery {
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
        if let Some(data_type_id) = &self.data_type_id {
            query.append_id("datatypeid", data_type_id);
        }
        if let Some(data_category_id) = &self.data_category_id {
            query.append_id("datacategoryid", data_category_id);
        }
        if let Some(location_id) = &self.location_id {
            query.append_id("locationid", location_id);
        }
        if let Some(start_date) = &self.start_date {
            query.append_date("startdate", start_date, false);
        }
        if let Some(end_date) = &self.end_date {
            query.append_date("enddate", end_date, false);
        }
        if let Some(extent) = &self.extent {
            query.append("extent", extent);
        }
        self.common.append_to(&mut query);
        query.apply(url)
    }
}

impl StationQuery {
    pub fn with_dataset_id(mut self, dataset_id: impl Into<IdFilter>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }
    pub fn with_data_type_id(mut self, data_type_id: impl Into<IdFilter>) -> Self {
        self.data_type_id = Some(data_type_id.into());
        self
    }
    pub fn with_data_category_id(mut self, data_category_id: impl Into<IdFilter>) -> Self {
        self.data_category_id = Some(data_category_id.into());
        self
    }
    pub fn with_location_id(mut self, location_id: impl Into<IdFilter>) -> Self {
        self.location_id = Some(location_id.into());
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
    pub fn with_extent(mut self, extent: &str) -> Self {
        self.extent = Some(extent.to_string());
        self
    }
}
