use url::Url;

use crate::types::{DateFilter, IdFilter};

use super::common::{Query, QueryCommon, QueryString};

/// Filters for the `datasets` catalog endpoint.
#[derive(Default)]
pub struct DatasetQuery {
    pub common: QueryCommon,
    pub data_type_id: Option<IdFilter>,
    pub location_id: Option<IdFilter>,
    pub station_id: Option<IdFilter>,
    pub start_date: Option<DateFilter>,
    pub end_date: Option<DateFilter>,
}

impl Query for DatasetQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut query = QueryString::default();
        if let Some(data_type_id) = &self.data_type_id {
            query.append_id("datatypeid", data_type_id);
        }
        if let Some(location_id) = &self.location_id {
            query.append_id("locationid", location_id);
        }
        if let Some(station_id) = &self.station_id {
            query.append_id("stationid", station_id);
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

impl DatasetQuery {
    pub fn with_data_type_id(mut self, data_type_id: impl Into<IdFilter>) -> Self {
        self.data_type_id = Some(data_type_id.into());
        self
    }
    pub fn with_location_id(mut self, location_id: impl Into<IdFilter>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }
    pub fn with_station_id(mut self, station_id: impl Into<IdFilter>) -> Self {
        self.station_id = Some(station_id.into());
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
