pub mod requests;
pub mod responses;

pub use requests::{
    FilterValue, Filters, PaginationParams, QueryError, Sort, SortOrder,
};
pub use responses::{ErrorBody, Item, Paginated};
