//! API 라우트 설정 모듈
//!
//! 회원가입 엔드포인트 하나만 노출합니다.
//!
//! - `POST /users` - 사용자 등록
//! - `/users`의 다른 메서드 - 404 (405 대신)
//!
//! 애플리케이션 전체의 라우트 미스는 `App::default_service`에
//! [`not_found`](crate::handlers::users::not_found)를 등록해 처리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .configure(configure_all_routes)
//!     .default_service(web::to(handlers::users::not_found));
//! ```

use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ana","email":"a@x.com","password":"p","birthDate":"2000-01-01","nick":"ana1"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(handlers::users::create_user))
            .default_service(web::to(handlers::users::not_found)),
    );
}
