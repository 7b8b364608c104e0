//! # 사용자 리포지토리 구현
//!
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 읽기 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **생성자 주입**: `Database`와 `RedisClient`를 `Arc`로 전달받음
//! - **데이터 무결성**: 이메일/사용자명 유니크 인덱스

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    db::Database,
    domain::{dto::common::PaginationOptions, entities::users::User},
    errors::{AppError, ErrorContext},
};
use super::user_repository::UserRepository;

const COLLECTION: &str = "users";
const CACHE_TTL_SECONDS: u64 = 600;

/// MongoDB 기반 사용자 리포지토리
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 사용자: `user:{user_id}` (소문자 16진수 ObjectId)
///   - 이메일 조회: `user:email:{email}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), created_at(desc)
///
/// 캐시 장애는 조회를 실패시키지 않습니다. 캐시 읽기/쓰기 오류는 경고 로그만
/// 남기고 MongoDB 결과를 그대로 사용합니다.
pub struct MongoUserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, redis: Arc<RedisClient>) -> Self {
        Self { db, redis }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }

    fn cache_key(id: &ObjectId) -> String {
        format!("user:{}", id.to_hex())
    }

    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    async fn cached(&self, key: &str) -> Option<User> {
        match self.redis.get::<User>(key).await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ 사용자 캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn store_in_cache(&self, key: &str, user: &User) {
        if let Err(e) = self.redis.set_with_expiry(key, user, CACHE_TTL_SECONDS).await {
            log::warn!("⚠️ 사용자 캐시 저장 실패 ({}): {}", key, e);
        }
    }

    async fn invalidate(&self, keys: Vec<String>) {
        if let Err(e) = self.redis.del_multiple(&keys).await {
            log::warn!("⚠️ 사용자 캐시 무효화 실패 {:?}: {}", keys, e);
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. `email` 유니크 인덱스 - 중복 이메일 방지 및 이메일 조회 최적화
    /// 2. `username` 유니크 인덱스 - 중복 사용자명 방지
    /// 3. `created_at` 내림차순 인덱스 - 목록 조회 정렬
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다. 이미 중복 데이터가 있으면
    /// 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await?;

        log::info!("📇 users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;
        let cache_key = Self::cache_key(&object_id);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "_id": object_id })
            .await?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = Self::email_cache_key(email);

        if let Some(cached) = self.cached(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection()
            .find_one(doc! { "email": email })
            .await?;

        if let Some(ref user) = user {
            self.store_in_cache(&cache_key, user).await;
        }

        Ok(user)
    }

    /// 사용자명 조회는 빈도가 낮아 캐싱하지 않습니다.
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection()
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID를 읽을 수 없습니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn update(&self, id: &str, user: &User) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;

        let mut fields = to_document(user).context("사용자 문서 직렬화 실패")?;
        fields.remove("_id");

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .with_options(options)
            .await?;

        let Some(previous) = previous else {
            return Ok(None);
        };

        let mut keys = vec![Self::cache_key(&object_id), Self::email_cache_key(&previous.email)];
        if previous.email != user.email {
            keys.push(Self::email_cache_key(&user.email));
        }
        self.invalidate(keys).await;

        let mut updated = user.clone();
        updated.id = Some(object_id);
        updated.created_at = previous.created_at;
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let deleted = self.collection()
            .find_one_and_delete(doc! { "_id": object_id })
            .await?;

        match deleted {
            Some(user) => {
                self.invalidate(vec![Self::cache_key(&object_id), Self::email_cache_key(&user.email)]).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_page(&self, options: &PaginationOptions) -> Result<(Vec<User>, u64), AppError> {
        let collection = self.collection();

        let total = collection.count_documents(doc! {}).await?;

        let limit = i64::try_from(options.limit)
            .map_err(|_| AppError::ValidationError("limit 값이 너무 큽니다".to_string()))?;

        let users: Vec<User> = collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(options.skip())
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((users, total))
    }

    async fn replace_role(&self, old: &str, new: Option<&str>) -> Result<u64, AppError> {
        let collection = self.collection();
        let filter = doc! { "roles": old };

        let affected: Vec<User> = collection.find(filter.clone()).await?.try_collect().await?;
        if affected.is_empty() {
            return Ok(0);
        }

        let result = match new {
            Some(new) => {
                collection
                    .update_many(filter, doc! { "$set": { "roles.$[role]": new } })
                    .array_filters(vec![doc! { "role": old }])
                    .await?
            }
            None => {
                collection
                    .update_many(filter, doc! { "$pull": { "roles": old } })
                    .await?
            }
        };

        let keys = affected
            .iter()
            .flat_map(|user| {
                let mut keys = vec![Self::email_cache_key(&user.email)];
                if let Some(id) = &user.id {
                    keys.push(Self::cache_key(id));
                }
                keys
            })
            .collect();
        self.invalidate(keys).await;

        Ok(result.modified_count)
    }
}
