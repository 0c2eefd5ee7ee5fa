pub mod response;

pub use response::RefreshResponse;
