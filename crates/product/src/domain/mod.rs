pub mod requests;
pub mod response;
