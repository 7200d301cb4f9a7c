//! Polling fetch layer: query keys, the keyed store and the scheduler.

pub mod dashboard;
pub mod key;
pub mod scheduler;
pub mod store;

pub use dashboard::DashboardQueries;
pub use key::{ErrorPolicy, Payload, QueryKey, QueryOptions};
pub use scheduler::{Fetcher, QueryScheduler, Subscription};
pub use store::{QueryEntry, QueryStore};
