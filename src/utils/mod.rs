//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 게시글 본문 욕설 필터
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::censor_profanity;
//!
//! let clean = censor_profanity("what a kerfuffle");
//! ```

pub mod string_utils;
