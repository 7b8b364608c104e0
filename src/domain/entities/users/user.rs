//! User Entity Implementation
//!
//! 계정 레코드의 메모리 표현입니다. 비밀번호 해싱과 형식 검증은
//! 엔티티 자신이 담당합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::errors::{AppError, ErrorContext};

/// 신규 사용자에게 부여되는 기본 역할
pub const DEFAULT_ROLE: &str = "user";

/// bcrypt가 입력으로 사용하는 최대 바이트 수
const MAX_PASSWORD_BYTES: usize = 72;
const MIN_PASSWORD_CHARS: usize = 8;

/// 사용자 엔티티
///
/// `email`과 `username`은 전체 사용자 사이에서 유일합니다.
/// `password_hash`에는 항상 bcrypt 해시만 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 표시 이름
    pub name: String,
    /// 전체 이름
    pub fullname: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 비밀번호 해시는 비어 있는 상태로 시작하므로, 저장 전에 반드시
    /// [`User::encrypt_password`]를 호출해야 합니다.
    pub fn new(email: String, username: String, name: String, fullname: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            name,
            fullname,
            password_hash: String::new(),
            roles: vec![DEFAULT_ROLE.to_string()],
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 평문 비밀번호를 bcrypt로 해싱하여 저장합니다.
    pub fn encrypt_password(&mut self, plain: &str, cost: u32) -> Result<(), AppError> {
        self.password_hash = bcrypt::hash(plain, cost).context("비밀번호 해싱 실패")?;
        Ok(())
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    pub fn verify_password(&self, plain: &str) -> Result<bool, AppError> {
        if self.password_hash.is_empty() {
            return Ok(false);
        }
        bcrypt::verify(plain, &self.password_hash).context("비밀번호 검증 실패")
    }

    /// 새 비밀번호의 형식 규칙 검증
    ///
    /// 8자 이상, 72바이트 이하이며 대문자, 소문자, 숫자를 각각 하나 이상 포함해야 합니다.
    pub fn validate_password_format(plain: &str) -> Result<(), AppError> {
        if plain.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::ValidationError(
                format!("비밀번호는 최소 {}자 이상이어야 합니다", MIN_PASSWORD_CHARS),
            ));
        }

        if plain.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::ValidationError(
                format!("비밀번호는 {}바이트를 넘을 수 없습니다", MAX_PASSWORD_BYTES),
            ));
        }

        let has_uppercase = plain.chars().any(|c| c.is_uppercase());
        let has_lowercase = plain.chars().any(|c| c.is_lowercase());
        let has_digit = plain.chars().any(|c| c.is_ascii_digit());

        if !(has_uppercase && has_lowercase && has_digit) {
            return Err(AppError::ValidationError(
                "비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".to_string(),
            ));
        }

        Ok(())
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
