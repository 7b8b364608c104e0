//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 조회 캐시와 JSON 기반 객체 직렬화를 제공합니다.
//! 사용자 리포지토리가 ID/이메일 조회 결과를 10분간 캐싱하는 데 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("user:123", &user, 600).await?;
//! let cached: Option<User> = cache.get("user:123").await?;
//! cache.del_multiple(&["user:123".to_string()]).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
