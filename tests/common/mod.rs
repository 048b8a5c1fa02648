//! Shared helpers for the storage-backed tests.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL`
//! and applies `./migrations` before the test body runs.

#![allow(dead_code)]

use actix_web::{App, dev::ServiceResponse, test, web};
use sqlx::PgPool;

use attendee_admin::auth::rate_limit::LoginLimiter;
use attendee_admin::handlers;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";

/// Insert an attendee row and return its storage-assigned id.
pub async fn insert_attendee(
    pool: &PgPool,
    name: &str,
    email: &str,
    year: i16,
    spec: i16,
    competition: i16,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO attendees \
            (name, email, phone, year, spec, competition, reason, comments, expectations, teamName, experience) \
         VALUES ($1, $2, '555-0100', $3, $4, $5, 'to learn', '', 'pizza', 'Team Rocket', 'beginner') \
         RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(year)
    .bind(spec)
    .bind(competition)
    .fetch_one(pool)
    .await
    .expect("insert attendee")
}

/// Send a request through the full `/admin` route table.
pub async fn call(pool: &PgPool, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(LoginLimiter::default()))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found)),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}
