pub mod inspect;
pub mod summary;
