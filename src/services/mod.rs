//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 trait(계약)과 `*Impl` 구현으로 나뉘며, 구현은 생성자로
//! 저장소 trait 객체를 전달받습니다. 조립은 [`AccountModule`](crate::core::AccountModule)이
//! 담당합니다.
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `interface UserService` | [`users::UserService`] |
//! | `@Service class UserServiceImpl` | [`users::UserServiceImpl`] |
//! | `@Autowired` 생성자 주입 | `UserServiceImpl::new(repo, ...)` |

pub mod users;
pub mod roles;
pub mod auth;
