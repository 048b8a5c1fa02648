pub mod admin_handlers;
pub mod attendee_handlers;

use actix_web::{HttpResponse, web};

/// Configure the `/admin` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/login")
                    .app_data(web::JsonConfig::default().error_handler(admin_handlers::login_body_error))
                    .route(web::post().to(admin_handlers::login)),
            )
            // /attendees/search BEFORE /attendees/{index} to avoid routing conflict
            .route("/attendees", web::get().to(attendee_handlers::list))
            .route("/attendees/search", web::get().to(attendee_handlers::search))
            .route("/attendees/{index}", web::get().to(attendee_handlers::read))
            .route("/attendees/{index}", web::delete().to(attendee_handlers::delete)),
    );
}

/// JSON 404 for anything outside the configured routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found." }))
}
