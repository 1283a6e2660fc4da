//! HTTP client for the NOAA Climate Data Online API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::query::{
    DataCategoryQuery, DataQuery, DataTypeQuery, DatasetQuery, LocationCategoryQuery,
    LocationQuery, Query, StationQuery,
};
use crate::{validation, Error};

/// HTTP client for the NOAA Climate Data Online API.
///
/// Holds the caller's access token and sends it in the `token` header of
/// every request. Each request builds a fresh `reqwest::Client` with a
/// 30-second timeout. The client itself is immutable, so one instance can be
/// shared freely across tasks.
pub struct Client {
    /// Base URL for the API. Defaults to `https://www.ncdc.noaa.gov/cdo-web/api/v2`.
    base_api_url: String,
    token: String,
}

impl Client {
    /// Creates a new client pointing at the production CDO API.
    ///
    /// Fails with [`Error::Validation`] when the token is empty or blank.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_base_url(token, "https://www.ncdc.noaa.gov/cdo-web/api/v2")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self, Error> {
        validation::validate_token(token)?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        query.validate()?;
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("token", &self.token)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the catalog of available datasets.
    pub async fn get_datasets(&self, query: &DatasetQuery) -> Result<Value, Error> {
        self.get("/datasets", query).await
    }

    /// Fetches a single dataset by id, forwarding any remaining filters.
    pub async fn get_dataset(&self, dataset_id: &str, query: &DatasetQuery) -> Result<Value, Error> {
        validation::validate_resource_id(dataset_id, "dataset_id")?;
        self.get(format!("/datasets/{}", dataset_id).as_str(), query)
            .await
    }

    /// Fetches the catalog of data categories.
    pub async fn get_data_categories(&self, query: &DataCategoryQuery) -> Result<Value, Error> {
        self.get("/datacategories", query).await
    }

    /// Fetches a single data category by id.
    pub async fn get_data_category(
        &self,
        data_category_id: &str,
        query: &DataCategoryQuery,
    ) -> Result<Value, Error> {
        validation::validate_resource_id(data_category_id, "data_category_id")?;
        self.get(format!("/datacategories/{}", data_category_id).as_str(), query)
            .await
    }

    /// Fetches the catalog of data types.
    pub async fn get_data_types(&self, query: &DataTypeQuery) -> Result<Value, Error> {
        self.get("/datatypes", query).await
    }

    /// Fetches a single data type by id.
    pub async fn get_data_type(
        &self,
        data_type_id: &str,
        query: &DataTypeQuery,
    ) -> Result<Value, Error> {
        validation::validate_resource_id(data_type_id, "data_type_id")?;
        self.get(format!("/datatypes/{}", data_type_id).as_str(), query)
            .await
    }

    /// Fetches the catalog of location categories.
    pub async fn get_location_categories(
        &self,
        query: &LocationCategoryQuery,
    ) -> Result<Value, Error> {
        self.get("/locationcategories", query).await
    }

    /// Fetches a single location category by id.
    pub async fn get_location_category(
        &self,
        location_category_id: &str,
        query: &LocationCategoryQuery,
    ) -> Result<Value, Error> {
        validation::validate_resource_id(location_category_id, "location_category_id")?;
        self.get(
            format!("/locationcategories/{}", location_category_id).as_str(),
            query,
        )
        .await
    }

    /// Fetches the catalog of locations.
    pub async fn get_locations(&self, query: &LocationQuery) -> Result<Value, Error> {
        self.get("/locations", query).await
    }

    /// Fetches a single location by id.
    pub async fn get_location(
        &self,
        location_id: &str,
        query: &LocationQuery,
    ) -> Result<Value, Error> {
        validation::validate_resource_id(location_id, "location_id")?;
        self.get(format!("/locations/{}", location_id).as_str(), query)
            .await
    }

    /// Fetches the catalog of observing stations.
    pub async fn get_stations(&self, query: &StationQuery) -> Result<Value, Error> {
        self.get("/stations", query).await
    }

    /// Fetches a single station by id.
    pub async fn get_station(&self, station_id: &str, query: &StationQuery) -> Result<Value, Error> {
        validation::validate_resource_id(station_id, "station_id")?;
        self.get(format!("/stations/{}", station_id).as_str(), query)
            .await
    }

    /// Fetches observational data for the query's dataset and date range.
    pub async fn get_data(&self, query: &DataQuery) -> Result<Value, Error> {
        self.get("/data", query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
