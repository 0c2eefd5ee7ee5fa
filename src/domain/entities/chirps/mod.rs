//! Chirps Entity Module

pub mod chirp;

pub use chirp::Chirp;
