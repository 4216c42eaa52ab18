//! Request payloads for the extraction service.
//!
//! Each remote operation is a plain serde struct that knows its endpoint
//! path through the [`Operation`] trait. Payloads carry no behaviour: the
//! transaction executor in `web-extract-data` is the only thing that sends them.

pub mod links;
pub mod next;
pub mod operation;
pub mod scrape;
pub mod search;

#[cfg(test)]
mod tests;

pub use links::LinksRequest;
pub use next::NextRequest;
pub use operation::Operation;
pub use scrape::{ScrapeFields, ScrapeRequest};
pub use search::{DEFAULT_GOOGLE_DOMAIN, DEFAULT_SEARCH_PAGE, SearchRequest};
