//! 페이지네이션 요청/응답 DTO
//!
//! 목록 조회 엔드포인트가 공통으로 사용하는 `page`/`limit` 쿼리 파라미터와,
//! 전체 항목 수로부터 계산되는 페이지 메타데이터를 정의합니다.
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "data": [ ... ],
//!   "meta": {
//!     "page": 3,
//!     "limit": 10,
//!     "itemCount": 25,
//!     "pageCount": 3,
//!     "hasPreviousPage": true,
//!     "hasNextPage": false
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::AppError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// 페이지 요청 파라미터 (`?page=1&limit=10`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PaginationOptions {
    /// 1부터 시작하는 페이지 번호
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    pub page: u64,

    /// 페이지 크기
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit은 1-100 사이여야 합니다"))]
    pub limit: u64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationOptions {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// 현재 페이지 앞에서 건너뛸 항목 수
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// 페이지 메타데이터
///
/// `(page, limit, item_count)`의 순수 함수이며 별도의 상태를 갖지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub item_count: u64,
    pub page_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PageMeta {
    /// 요청 파라미터와 전체 항목 수로 메타데이터를 계산합니다.
    ///
    /// `limit`이 0이면 페이지 수를 정의할 수 없으므로 `ValidationError`를 반환합니다.
    pub fn new(options: &PaginationOptions, item_count: u64) -> Result<Self, AppError> {
        if options.limit == 0 {
            return Err(AppError::ValidationError(
                "limit은 1 이상이어야 합니다".to_string(),
            ));
        }

        let page_count = item_count.div_ceil(options.limit);

        Ok(Self {
            page: options.page,
            limit: options.limit,
            item_count,
            page_count,
            has_previous_page: options.page > 1,
            has_next_page: options.page < page_count,
        })
    }
}

/// 페이지 단위 목록 응답
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }

    /// 항목 타입을 변환합니다 (엔티티 → 응답 DTO).
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page: u64, limit: u64, item_count: u64) -> PageMeta {
        PageMeta::new(&PaginationOptions::new(page, limit), item_count).unwrap()
    }

    #[test]
    fn test_last_page_of_partial_result() {
        let meta = meta(3, 10, 25);

        assert_eq!(meta.page_count, 3);
        assert!(meta.has_previous_page);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_first_page_has_next_but_no_previous() {
        let meta = meta(1, 10, 25);

        assert_eq!(meta.page_count, 3);
        assert!(!meta.has_previous_page);
        assert!(meta.has_next_page);
    }

    #[test]
    fn test_page_count_is_ceiling_of_item_count_over_limit() {
        for (item_count, limit, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (100, 7, 15)] {
            assert_eq!(meta(1, limit, item_count).page_count, expected);
        }
    }

    #[test]
    fn test_empty_result_has_no_next_page() {
        let meta = meta(1, 10, 0);

        assert_eq!(meta.page_count, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_page_beyond_last_has_previous_only() {
        let meta = meta(5, 10, 25);

        assert!(meta.has_previous_page);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let result = PageMeta::new(&PaginationOptions::new(1, 0), 25);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_options_validation_and_skip() {
        assert!(PaginationOptions::new(1, 10).validate().is_ok());
        assert!(PaginationOptions::new(0, 10).validate().is_err());
        assert!(PaginationOptions::new(1, 0).validate().is_err());
        assert!(PaginationOptions::new(1, 101).validate().is_err());

        assert_eq!(PaginationOptions::new(1, 10).skip(), 0);
        assert_eq!(PaginationOptions::new(3, 10).skip(), 20);
    }

    #[test]
    fn test_options_defaults_from_empty_query() {
        let options: PaginationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PaginationOptions::default());
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let json = serde_json::to_value(meta(3, 10, 25)).unwrap();

        assert_eq!(json["itemCount"], 25);
        assert_eq!(json["pageCount"], 3);
        assert_eq!(json["hasPreviousPage"], true);
        assert_eq!(json["hasNextPage"], false);
    }
}
