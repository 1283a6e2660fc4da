use url::Url;

use crate::errors::Error;
use crate::types::{DateFilter, IdFilter, Units};
use crate::validation;

use super::common::{Query, QueryCommon, QueryString};

/// Query for the `data` fetch endpoint.
///
/// The dataset id and the date range are mandatory on this endpoint, so they
/// are constructor arguments rather than optional builder fields. Dates here
/// always serialize with a time component; a bare date becomes midnight.
pub struct DataQuery {
    pub common: QueryCommon,
    pub dataset_id: String,
    pub data_type_id: Option<IdFilter>,
    pub location_id: Option<IdFilter>,
    pub station_id: Option<IdFilter>,
    pub start_date: DateFilter,
    pub end_date: DateFilter,
    /// Measurement units for the returned values. Defaults to metric.
    pub units: Units,
    /// Whether the response should carry its result-set metadata block.
    /// Omitted from the wire unless set; the API treats absent as false.
    pub include_metadata: bool,
}

impl DataQuery {
    pub fn new(
        dataset_id: impl Into<String>,
        start_date: impl Into<DateFilter>,
        end_date: impl Into<DateFilter>,
    ) -> Self {
        DataQuery {
            common: QueryCommon::default(),
            dataset_id: dataset_id.into(),
            data_type_id: None,
            location_id: None,
            station_id: None,
            start_date: start_date.into(),
            end_date: end_date.into(),
            units: Units::Metric,
            include_metadata: false,
        }
    }

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
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }
    pub fn with_include_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }
}

impl Query for DataQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn common_mut(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn validate(&self) -> Result<(), Error> {
        validation::validate_resource_id(&self.dataset_id, "dataset_id")?;
        validation::validate_limit(self.common.limit)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut query = QueryString::default();
        query.append("datasetid", &self.dataset_id);
        if let Some(data_type_id) = &self.data_type_id {
            query.append_id("datatypeid", data_type_id);
        }
        if let Some(location_id) = &self.location_id {
            query.append_id("locationid", location_id);
        }
        if let Some(station_id) = &self.station_id {
            query.append_id("stationid", station_id);
        }
        query.append_date("startdate", &self.start_date, true);
        query.append_date("enddate", &self.end_date, true);
        query.append("units", &self.units.to_string());
        self.common.append_to(&mut query);
        if self.include_metadata {
            query.append("includemetadata", "true");
        }
        query.apply(url)
    }
}
