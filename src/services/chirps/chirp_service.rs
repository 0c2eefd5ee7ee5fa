//! 게시글 서비스
//!
//! 작성 요청 검증, 욕설 필터, 작성자 확인 삭제를 담당합니다.

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::chirps::CreateChirpRequest;
use crate::domain::entities::Chirp;
use crate::errors::AppResult;
use crate::repositories::chirps::ChirpRepository;
use crate::utils::string_utils::censor_profanity;

pub struct ChirpService {
    chirp_repo: Arc<ChirpRepository>,
}

impl ChirpService {
    pub fn new(chirp_repo: Arc<ChirpRepository>) -> Self {
        Self { chirp_repo }
    }

    /// 게시글 작성
    ///
    /// 원문 길이가 140자를 넘으면 `ValidationError`("Chirp is too long")이며,
    /// 통과한 본문은 욕설 필터를 거쳐 저장됩니다.
    pub fn create_chirp(&self, author_id: u64, request: CreateChirpRequest) -> AppResult<Chirp> {
        request.validate()?;
        let body = censor_profanity(&request.body);
        self.chirp_repo.create(author_id, body)
    }

    pub fn get_chirp(&self, id: u64) -> AppResult<Chirp> {
        self.chirp_repo.get(id)
    }

    /// ID 오름차순 전체 목록
    pub fn list_chirps(&self) -> AppResult<Vec<Chirp>> {
        self.chirp_repo.list()
    }

    /// 작성자 본인만 삭제할 수 있습니다.
    pub fn delete_chirp(&self, id: u64, requester_id: u64) -> AppResult<Chirp> {
        self.chirp_repo.delete(id, requester_id)
    }
}
