//! 공통 DTO

pub mod pagination;

pub use pagination::{Page, PageMeta, PaginationOptions};
