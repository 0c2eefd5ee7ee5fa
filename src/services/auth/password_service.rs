//! bcrypt 기반 비밀번호 해싱 서비스
//!
//! 평문 비밀번호는 저장하지도, 로그에 남기지도 않습니다.

use log::debug;

use crate::errors::{AppResult, ErrorContext};

/// 비밀번호 해싱/검증 서비스
///
/// cost는 생성 시점에 고정됩니다. 해시 문자열 자체에 cost와 솔트가
/// 포함되므로 cost를 바꿔도 기존 해시는 계속 검증됩니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 솔트를 포함한 bcrypt 해시를 생성합니다.
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let hashed = bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")?;
        debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }

    /// 평문이 해시와 일치하는지 bcrypt 자체 비교로 확인합니다.
    ///
    /// 비밀번호가 없는 계정(빈 해시)은 어떤 평문과도 일치하지 않습니다.
    /// 그 밖에 해시 문자열이 bcrypt 형식이 아니면 `InternalError`입니다.
    pub fn verify(&self, hash: &str, plaintext: &str) -> AppResult<bool> {
        if hash.is_empty() {
            return Ok(false);
        }
        bcrypt::verify(plaintext, hash).context("비밀번호 검증 실패")
    }
}
