pub mod layout;
pub mod pagination_controls;
pub mod select;

pub use pagination_controls::PaginationControls;
pub use select::{Select, SelectOption};
