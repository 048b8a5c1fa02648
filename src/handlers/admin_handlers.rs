use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use serde::Deserialize;
use sqlx::PgPool;
use std::net::{IpAddr, Ipv4Addr};

use crate::auth::{self, rate_limit::LoginLimiter};
use crate::errors::AppError;

pub const LOGIN_FAILED: &str = "Login Failed!";
pub const LOGIN_OK: &str = "Login Successful!";
pub const LOGIN_BLOCKED: &str = "Too many failed login attempts. Please try again later.";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn login_failed() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "message": LOGIN_FAILED }))
}

/// Malformed login bodies get the same answer as bad credentials.
pub fn login_body_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected login body: {err}");
    actix_web::error::InternalError::from_response(err, login_failed()).into()
}

/// POST /admin/login
pub async fn login(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    limiter: web::Data<LoginLimiter>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Login blocked for {ip}");
        return Ok(HttpResponse::TooManyRequests().json(serde_json::json!({ "message": LOGIN_BLOCKED })));
    }

    if auth::verify_admin(&pool, &body.username, &body.password).await? {
        limiter.clear(ip);
        log::info!("Admin '{}' logged in from {ip}", body.username);
        Ok(HttpResponse::Ok().json(serde_json::json!({ "message": LOGIN_OK })))
    } else {
        limiter.record_failure(ip);
        Ok(login_failed())
    }
}
