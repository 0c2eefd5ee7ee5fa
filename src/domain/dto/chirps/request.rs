//! 게시글 작성 요청 DTO
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 게시글 최대 길이 (문자 수)
pub const MAX_CHIRP_LENGTH: u64 = 140;

/// 게시글 작성 요청
///
/// 길이 검사는 욕설 필터 적용 전 원문 기준입니다. 필터는 단어를 같은
/// 길이 이하의 `****`로 바꾸므로 필터 후 길이도 항상 제한 이내입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChirpRequest {
    #[validate(length(max = MAX_CHIRP_LENGTH, message = "Chirp is too long"))]
    pub body: String,
}
