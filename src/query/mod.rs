mod common;
pub use self::common::{Query, QueryCommon};

mod datasets;
pub use self::datasets::DatasetQuery;

mod data_categories;
pub use self::data_categories::DataCategoryQuery;

mod data_types;
pub use self::data_types::DataTypeQuery;

mod location_categories;
pub use self::location_categories::LocationCategoryQuery;

mod locations;
pub use self::locations::LocationQuery;

mod stations;
pub use self::stations::StationQuery;

mod data;
pub use self::data::DataQuery;
