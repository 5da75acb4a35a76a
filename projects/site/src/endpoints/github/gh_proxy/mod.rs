pub mod index;
pub mod request;
