mod client;
mod errors;
mod query;
mod types;
mod validation;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    DataCategoryQuery, DataQuery, DataTypeQuery, DatasetQuery, LocationCategoryQuery,
    LocationQuery, Query, QueryCommon, StationQuery,
};
pub use self::types::{DateFilter, IdFilter, SortField, SortOrder, Units};
