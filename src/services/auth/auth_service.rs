//! 로컬 계정 인증 서비스
//!
//! 회원가입, 이메일/비밀번호 로그인, 토큰 갱신과 검증을 담당합니다.
//! 사용자 조회는 [`UserService`]에, 토큰 발급은 [`TokenService`]에 위임합니다.
//!
//! 로그인 실패 사유(없는 이메일, 틀린 비밀번호, 비활성 계정)는 클라이언트에게
//! 구분되지 않는 같은 메시지로 응답합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    domain::{
        dto::users::{request::CreateUserRequest, response::LoginResponse},
        entities::users::User,
        models::token::TokenClaims,
    },
    errors::AppError,
    services::users::UserService,
    utils::string_utils::normalize_email,
};
use super::token_service::TokenService;

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

/// 인증 서비스 계약
#[async_trait]
pub trait AuthService: Send + Sync {
    /// 회원가입 후 생성된 사용자를 반환합니다.
    async fn signup(&self, request: CreateUserRequest) -> Result<User, AppError>;

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError>;

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    async fn refresh(&self, refresh_token: &str) -> Result<LoginResponse, AppError>;

    /// 액세스 토큰 검증
    fn verify(&self, access_token: &str) -> Result<TokenClaims, AppError>;

    async fn current_user(&self, user_id: &str) -> Result<User, AppError>;
}

pub struct AuthServiceImpl {
    user_service: Arc<dyn UserService>,
    token_service: Arc<TokenService>,
}

impl AuthServiceImpl {
    pub fn new(user_service: Arc<dyn UserService>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_service,
            token_service,
        }
    }

    fn issue(&self, user: User) -> Result<LoginResponse, AppError> {
        let pair = self.token_service.generate_token_pair(&user)?;
        Ok(LoginResponse::new(user, pair.access_token, pair.refresh_token, pair.expires_in))
    }

    fn rejected(reason: &str, email: &str) -> AppError {
        log::warn!("🔒 로그인 거부 ({}): {}", reason, email);
        AppError::AuthenticationError(INVALID_CREDENTIALS.to_string())
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn signup(&self, request: CreateUserRequest) -> Result<User, AppError> {
        let email = normalize_email(&request.email);
        self.user_service.create(request).await?;
        self.user_service.get_by_email(&email).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let user = match self.user_service.get_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => return Err(Self::rejected("unknown email", email)),
            Err(e) => return Err(e),
        };

        if !user.verify_password(password)? {
            return Err(Self::rejected("wrong password", email));
        }

        if !user.is_active {
            return Err(Self::rejected("inactive account", email));
        }

        log::info!("🔓 로그인 성공: {}", user.email);
        self.issue(user)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<LoginResponse, AppError> {
        let claims = self.token_service.verify_refresh_token(refresh_token)?;

        let user = match self.user_service.get_by_id(&claims.sub).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()));
            }
            Err(e) => return Err(e),
        };

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        self.issue(user)
    }

    fn verify(&self, access_token: &str) -> Result<TokenClaims, AppError> {
        self.token_service.verify_access_token(access_token)
    }

    async fn current_user(&self, user_id: &str) -> Result<User, AppError> {
        self.user_service.get_by_id(user_id).await
    }
}
