//! Wire types exchanged with the backend.
//!
//! All payloads are read-only projections of backend state. Numeric fields
//! default to zero and collections to empty whenever the backend omits them
//! or sends `null`.

pub mod dashboard;
pub(crate) mod de;
pub mod tokens;

pub use dashboard::*;
pub use tokens::*;
