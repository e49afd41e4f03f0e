pub mod use_fetch;
pub mod use_paginated_fetch;

pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_options};
pub use use_paginated_fetch::{
    PaginatedFetchHookReturn, use_paginated_fetch,
};
