mod pagination;

pub use pagination::{Pager, PaginationInfo};
