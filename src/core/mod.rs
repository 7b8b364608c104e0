//! # Core Module
//!
//! 애플리케이션 조립 계층입니다. Spring의 `@Configuration` 클래스가 빈을
//! 만들고 연결하듯, [`AccountModule`]이 저장소와 서비스를 생성자 주입으로
//! 조립하고 actix-web에 등록합니다.
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Configuration` | [`AccountModule`] |
//! | `@Bean` 메서드 | `AccountModule::new` 안의 생성자 호출 |
//! | `ApplicationContext.getBean()` | `web::Data<dyn UserService>` 추출자 |
//! | `@Profile("test")` | `AccountModule::in_memory` |
//!
//! 전역 레지스트리나 싱글톤은 없습니다. 모든 의존성은 명시적으로 전달되며,
//! 테스트는 원하는 구현을 직접 끼워 넣을 수 있습니다.

pub mod module;

pub use module::AccountModule;
