//! Chirp Entity Implementation
//!
//! 사용자가 작성한 짧은 게시글(최대 140자) 엔티티입니다.

use serde::{Deserialize, Serialize};

/// 게시글(chirp) 엔티티
///
/// 생성 후에는 삭제 외에 변경되지 않습니다.
/// `author_id`는 계정 존재 여부와 무관하게 그대로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// 게시글 고유 ID (단조 증가, 재사용되지 않음)
    pub id: u64,
    /// 비속어 필터를 거친 본문
    pub body: String,
    /// 작성자 계정 ID
    pub author_id: u64,
}

impl Chirp {
    pub fn new(id: u64, body: String, author_id: u64) -> Self {
        Self { id, body, author_id }
    }

    /// 주어진 계정이 이 게시글의 작성자인지 확인
    pub fn is_authored_by(&self, account_id: u64) -> bool {
        self.author_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chirp_json_shape() {
        let chirp = Chirp::new(5, "hello".to_string(), 7);
        let value = serde_json::to_value(&chirp).unwrap();
        assert_eq!(value, serde_json::json!({"id": 5, "body": "hello", "author_id": 7}));
    }

    #[test]
    fn test_is_authored_by() {
        let chirp = Chirp::new(5, "hello".to_string(), 7);
        assert!(chirp.is_authored_by(7));
        assert!(!chirp.is_authored_by(9));
    }
}
