//! Job Listings
//!
//! Read side of the monitor: the scraper writes a JSON cache, this module
//! loads it and derives everything the dashboard shows.
//!
//! - **types**: Job, City, JobType, JobData
//! - **store**: Cache file loading
//! - **stats**: Dashboard statistics
//! - **filter**: Search filters and facet options
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use jobwatch::jobs::{JobFilter, JobStore, JobType, Statistics};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = JobStore::in_dir("./data");
//!     let data = store.load().await;
//!
//!     let stats = Statistics::compute_now(&data);
//!     println!("{}", stats);
//!
//!     let filter = JobFilter::default().city("Beijing").search("rust");
//!     for job in filter.apply(data.jobs(JobType::Campus)) {
//!         println!("{}", job.title);
//!     }
//! }
//! ```

pub mod error;
pub mod filter;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use filter::{Facets, JobFilter};
pub use stats::{parse_publish_time, Statistics};
pub use store::{JobStore, CACHE_FILE_NAME};
pub use types::{City, Job, JobData, JobType};
