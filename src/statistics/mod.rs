//! Configuration-driven wiring between statistics endpoints and bar charts.
//!
//! A [`ChartCatalog`] maps chart ids to everything a host needs to request
//! the histogram and render it: target container, endpoint, query payload and
//! labels. Fetching stays with the host; this module builds the request
//! payload and decodes the response.

mod catalog;
mod query;
mod response;

pub use catalog::{ChartCatalog, ChartDefinition};
pub use query::{QueryScope, StatisticsQuery};
pub use response::{StatisticsSeries, decode_statistics_response};
