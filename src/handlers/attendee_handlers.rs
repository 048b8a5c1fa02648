use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::PgPool;

use crate::errors::{AppError, INTERNAL_ERROR};
use crate::models::attendee::{self, AttendeeFilter, AttendeeQuery, AttendeeView, filter::leading_int};

pub const INVALID_ID: &str = "Invalid registration ID.";
pub const USER_NOT_FOUND: &str = "User not found.";
pub const REGISTRATION_NOT_FOUND: &str = "Registration not found.";
pub const DELETED: &str = "Registration deleted successfully.";

/// Parse a path segment as a non-negative registration id.
/// Only the leading integer counts, so `12abc` addresses id 12.
pub fn parse_registration_id(raw: &str) -> Option<i64> {
    leading_int(raw).filter(|id| *id >= 0)
}

fn invalid_id() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": INVALID_ID }))
}

fn internal_error(tag: &str, err: sqlx::Error) -> HttpResponse {
    log::error!("[{tag}] {err}");
    HttpResponse::InternalServerError().json(json!({ "error": INTERNAL_ERROR }))
}

/// GET /admin/attendees - filters pushed into the SQL query.
/// Query params: name, email (exact), year, spec, competition (integer codes).
pub async fn list(
    pool: web::Data<PgPool>,
    query: web::Query<AttendeeQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = AttendeeFilter::from(&query.into_inner());
    let rows = attendee::find_filtered(&pool, &filter).await?;
    let views: Vec<AttendeeView> = rows.into_iter().map(AttendeeView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// GET /admin/attendees/search - same params, applied in memory.
/// `name` matches case-insensitive substrings here.
pub async fn search(
    pool: web::Data<PgPool>,
    query: web::Query<AttendeeQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = AttendeeFilter::from(&query.into_inner());
    let rows = attendee::find_matching(&pool, &filter).await?;
    let views: Vec<AttendeeView> = rows.into_iter().map(AttendeeView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// GET /admin/attendees/{index}
pub async fn read(pool: web::Data<PgPool>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_registration_id(&path) else {
        return invalid_id();
    };

    match attendee::find_by_id(&pool, id).await {
        Ok(Some(found)) => HttpResponse::Ok().json(AttendeeView::from(found)),
        Ok(None) => HttpResponse::NotFound().json(json!({ "message": USER_NOT_FOUND })),
        Err(e) => internal_error("attendees.read", e),
    }
}

/// DELETE /admin/attendees/{index}
pub async fn delete(pool: web::Data<PgPool>, path: web::Path<String>) -> HttpResponse {
    let Some(id) = parse_registration_id(&path) else {
        return invalid_id();
    };

    match attendee::delete_by_id(&pool, id).await {
        Ok(true) => {
            log::info!("Deleted registration {id}");
            HttpResponse::Ok().json(json!({ "message": DELETED }))
        }
        Ok(false) => HttpResponse::NotFound().json(json!({ "message": REGISTRATION_NOT_FOUND })),
        Err(e) => internal_error("attendees.delete", e),
    }
}
