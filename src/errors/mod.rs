//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 외부 에러 변환용 [`errors::ErrorContext`] 확장 trait,
//! 유니크 인덱스 위반 변환 [`errors::duplicate_key_conflict`]를 제공합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::{duplicate_key_conflict, AppError, ErrorContext};
