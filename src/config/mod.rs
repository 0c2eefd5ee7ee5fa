//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 스냅샷 파일, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 비밀키, 웹훅 API 키 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, JwtConfig, ServerConfig, StoreConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let path = StoreConfig::path();
//! let secret = JwtConfig::secret()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export DATABASE_PATH="./database.json"
//! export POLKA_KEY="..."
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-31 범위
//! ```
//!
//! `PROFILE=dev|prod`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다.

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
