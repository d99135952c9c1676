pub mod catalog;
pub mod config;
pub mod criteria;
pub mod error;
pub mod models;
pub mod playlist;
pub mod view;

pub use catalog::Catalog;
pub use config::{AppConfig, DisplayConfig, ScanConfig};
pub use criteria::{Criteria, QualityFilter, SortKey, SortOrder, TypeFilter, YearFilter};
pub use error::CoreError;
pub use models::Video;
pub use view::{view, View};
