//! Page window and slice computation.
//!
//! [`compute_pagination`] turns a [`PaginationRequest`] into a
//! [`PaginationResult`]. The `fetch` and `render` modules define the
//! contracts of the collaborators that consume that result.

pub mod builder;
pub mod fetch;
pub mod render;

pub use builder::compute_pagination;
pub use fetch::*;
pub use render::*;

pub use paginator_api::{PaginationError, PaginationOutcome, PaginationRequest, PaginationResult};
