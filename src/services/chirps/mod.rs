//! 게시글 서비스 모듈

pub mod chirp_service;

pub use chirp_service::ChirpService;
