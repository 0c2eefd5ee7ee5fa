//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(가입, 인증, 정보 수정, 멤버십 업그레이드)를
//! 관리하는 비즈니스 로직입니다.
//!
//! ```text
//! UserService
//! ├── create_user      ── 해싱 → UserRepository::create
//! ├── update_user      ── 해싱 → UserRepository::update
//! ├── verify_password  ── UserRepository::find_by_email → bcrypt 비교
//! └── upgrade_user     ── UserRepository::upgrade
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 평문 비밀번호는 해시된 뒤에만 리포지토리로 전달됩니다.
//! - **민감 정보 제거**: 외부로 나가는 값은 `UserResponse`로 변환되어 해시가 빠집니다.
//! - **동일한 실패 메시지**: 존재하지 않는 이메일과 틀린 비밀번호는 구분되지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use validator::Validate;

use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::PasswordService;

const INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
    password_service: PasswordService,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, password_service: PasswordService) -> Self {
        Self {
            user_repo,
            password_service,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 (`{id, email}`)
    /// * `Err(AppError::ValidationError)` - 이메일 또는 비밀번호 누락
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let start_time = std::time::Instant::now();

        let password_hash = self.password_service.hash(&request.password)?;
        let created_user = self.user_repo.create(request.email, password_hash)?;

        info!("Total user creation took: {:?}", start_time.elapsed());
        Ok(UserResponse::from(created_user))
    }

    /// 로그인한 사용자의 이메일과 비밀번호를 덮어씁니다.
    ///
    /// 현재 비밀번호 확인 없이 유효한 액세스 토큰만으로 변경됩니다.
    pub fn update_user(&self, user_id: u64, request: UpdateUserRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let password_hash = self.password_service.hash(&request.password)?;
        let updated = self.user_repo.update(user_id, request.email, password_hash)?;
        Ok(UserResponse::from(updated))
    }

    /// 이메일/비밀번호 인증
    ///
    /// # 에러
    ///
    /// * `AppError::AuthenticationError` - 이메일 없음 또는 비밀번호 불일치 (같은 메시지)
    pub fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.user_repo.find_by_email(email)? {
            Some(user) => user,
            None => {
                warn!("존재하지 않는 이메일로 로그인 시도");
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        if !self.password_service.verify(&user.password_hash, password)? {
            warn!("비밀번호 불일치: user_id={}", user.id);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// Chirpy Red 멤버십 부여
    pub fn upgrade_user(&self, user_id: u64) -> AppResult<User> {
        self.user_repo.upgrade(user_id)
    }
}
