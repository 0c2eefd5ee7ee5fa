pub mod request;

pub use request::{CreateChirpRequest, MAX_CHIRP_LENGTH};
