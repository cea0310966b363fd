// Shared utilities

pub mod clock;
pub mod constants;
pub mod navigation;
pub mod paging;
pub mod storage;
pub mod validate;
