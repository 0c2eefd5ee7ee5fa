//! # 게시글 리포지토리 구현
//!
//! 모든 연산은 `DocumentStore`의 단일 임계 구역 안에서 스냅샷 전체를
//! 읽고, 하나의 논리적 변경을 적용한 뒤, 다시 기록합니다.

use std::sync::Arc;

use log::{info, warn};

use crate::db::DocumentStore;
use crate::domain::entities::Chirp;
use crate::errors::{AppError, AppResult};

/// 게시글 데이터 액세스 리포지토리
///
/// 본문 길이나 욕설 필터 같은 입력 규칙은 서비스 계층의 책임이며,
/// 리포지토리는 주어진 본문을 그대로 저장합니다.
#[derive(Debug, Clone)]
pub struct ChirpRepository {
    store: Arc<DocumentStore>,
}

impl ChirpRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// 새 게시글을 저장합니다.
    ///
    /// ID는 스냅샷의 카운터에서 할당되며 삭제된 ID는 재사용되지 않습니다.
    pub fn create(&self, author_id: u64, body: String) -> AppResult<Chirp> {
        let chirp = self.store.transact(|snapshot| {
            let id = snapshot.allocate_chirp_id();
            let chirp = Chirp::new(id, body, author_id);
            snapshot.chirps.insert(id, chirp.clone());
            Ok::<_, AppError>(chirp)
        })?;

        info!("게시글 생성: id={}, author_id={}", chirp.id, chirp.author_id);
        Ok(chirp)
    }

    /// ID로 게시글 조회
    pub fn find_by_id(&self, id: u64) -> AppResult<Option<Chirp>> {
        Ok(self.store.view(|snapshot| snapshot.chirps.get(&id).cloned())?)
    }

    /// ID로 게시글 조회, 없으면 `NotFound`
    pub fn get(&self, id: u64) -> AppResult<Chirp> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))
    }

    /// 전체 게시글을 ID 오름차순으로 반환합니다.
    pub fn list(&self) -> AppResult<Vec<Chirp>> {
        Ok(self
            .store
            .view(|snapshot| snapshot.chirps.values().cloned().collect())?)
    }

    /// 게시글 삭제
    ///
    /// 존재 확인, 작성자 확인, 삭제가 하나의 임계 구역에서 수행됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시글 없음
    /// * `AppError::AuthorizationError` - 요청자가 작성자가 아님
    pub fn delete(&self, id: u64, requester_id: u64) -> AppResult<Chirp> {
        let deleted = self.store.transact(|snapshot| -> AppResult<Chirp> {
            let chirp = snapshot
                .chirps
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))?;

            if !chirp.is_authored_by(requester_id) {
                warn!(
                    "작성자가 아닌 계정의 삭제 시도: chirp={}, author_id={}, requester={}",
                    id, chirp.author_id, requester_id
                );
                return Err(AppError::AuthorizationError(
                    "You can only delete your own chirps".to_string(),
                ));
            }

            snapshot
                .chirps
                .remove(&id)
                .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))
        })?;

        info!("게시글 삭제: id={}", deleted.id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ChirpRepository) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::initialize(dir.path().join("database.json")).unwrap();
        (dir, ChirpRepository::new(Arc::new(store)))
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, repo) = repo();
        let chirp = repo.create(1, "hello".to_string()).unwrap();
        assert_eq!(chirp, Chirp::new(1, "hello".to_string(), 1));
        assert_eq!(repo.get(1).unwrap(), chirp);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_dir, repo) = repo();
        assert!(matches!(repo.get(42), Err(AppError::NotFound(_))));
        assert!(repo.find_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let (_dir, repo) = repo();
        for n in 0..12 {
            repo.create(n % 3, format!("chirp {}", n)).unwrap();
        }
        let ids: Vec<u64> = repo.list().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_delete_checks_ownership() {
        let (_dir, repo) = repo();
        let chirp = repo.create(1, "mine".to_string()).unwrap();

        let err = repo.delete(chirp.id, 2).unwrap_err();
        assert!(matches!(err, AppError::AuthorizationError(_)));
        assert!(repo.find_by_id(chirp.id).unwrap().is_some());

        let deleted = repo.delete(chirp.id, 1).unwrap();
        assert_eq!(deleted, chirp);
        assert!(repo.find_by_id(chirp.id).unwrap().is_none());

        assert!(matches!(repo.delete(chirp.id, 1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let (_dir, repo) = repo();
        repo.create(1, "a".to_string()).unwrap();
        let second = repo.create(1, "b".to_string()).unwrap();
        repo.delete(second.id, 1).unwrap();

        let third = repo.create(1, "c".to_string()).unwrap();
        assert_eq!(third.id, 3);
    }
}
