//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 선택 문자열 정리, 이메일 정규화
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//!
//! assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
//! ```

pub mod string_utils;
