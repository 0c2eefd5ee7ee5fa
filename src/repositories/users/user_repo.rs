//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **이메일 유니크 제약**: 삽입/수정 전에 스냅샷 전체를 스캔합니다.
//!   스캔과 삽입은 같은 임계 구역 안에서 이루어지므로 동시 가입 요청이
//!   같은 이메일로 두 계정을 만들 수 없습니다.
//! - **해시만 저장**: 리포지토리는 이미 해시된 비밀번호만 받습니다.
//!
//! ## 에러 처리
//!
//! - **StorageUnavailable / CorruptSnapshot**: 스냅샷 파일 접근 실패
//! - **NotFound**: 대상 사용자 없음
//! - **ConflictError**: 이메일 중복

use std::sync::Arc;

use log::{info, warn};

use crate::db::DocumentStore;
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};

/// 사용자 데이터 액세스 리포지토리
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// 새 사용자 생성
    ///
    /// # 인자
    ///
    /// * `email` - 사용자 이메일 (다른 계정과 중복 불가)
    /// * `password_hash` - bcrypt 해시
    ///
    /// # 에러
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    pub fn create(&self, email: String, password_hash: String) -> AppResult<User> {
        let user = self.store.transact(|snapshot| {
            if snapshot.find_user_by_email(&email).is_some() {
                return Err(AppError::ConflictError(format!(
                    "User with email {} already exists",
                    email
                )));
            }

            let id = snapshot.allocate_user_id();
            let user = User::new(id, email, password_hash);
            snapshot.users.insert(id, user.clone());
            Ok(user)
        })?;

        info!("사용자 생성: id={}", user.id);
        Ok(user)
    }

    /// ID로 사용자 조회
    pub fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        Ok(self.store.view(|snapshot| snapshot.users.get(&id).cloned())?)
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    pub fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .store
            .view(|snapshot| snapshot.find_user_by_email(email).cloned())?)
    }

    /// 이메일과 비밀번호 해시를 덮어씁니다.
    ///
    /// 멤버십 상태는 유지됩니다.
    ///
    /// # 에러
    ///
    /// * `AppError::NotFound` - 사용자 없음
    /// * `AppError::ConflictError` - 다른 계정이 이미 사용 중인 이메일
    pub fn update(&self, id: u64, email: String, password_hash: String) -> AppResult<User> {
        let user = self.store.transact(|snapshot| -> AppResult<User> {
            if let Some(other) = snapshot.find_user_by_email(&email) {
                if other.id != id {
                    warn!("다른 계정의 이메일로 변경 시도: id={}", id);
                    return Err(AppError::ConflictError(format!(
                        "User with email {} already exists",
                        email
                    )));
                }
            }

            let user = snapshot
                .users
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
            user.email = email;
            user.password_hash = password_hash;
            Ok(user.clone())
        })?;

        info!("사용자 정보 수정: id={}", user.id);
        Ok(user)
    }

    /// Chirpy Red 멤버십으로 업그레이드합니다. 이미 멤버이면 그대로 둡니다.
    pub fn upgrade(&self, id: u64) -> AppResult<User> {
        let user = self.store.transact(|snapshot| -> AppResult<User> {
            let user = snapshot
                .users
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
            user.is_chirpy_red = true;
            Ok(user.clone())
        })?;

        info!("Chirpy Red 업그레이드: id={}", user.id);
        Ok(user)
    }
}
