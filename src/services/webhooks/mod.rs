//! 외부 결제 제공자 웹훅 서비스 모듈

pub mod polka_service;

pub use polka_service::{PolkaService, WebhookOutcome};
