use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::AuthMiddleware};

pub mod auth_handler;
pub mod leaderboard_handler;
pub mod quiz_handler;

pub use auth_handler::{login, register};
pub use leaderboard_handler::get_leaderboard;
pub use quiz_handler::{get_quiz, list_quizzes, submit_quiz};

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.storage.backend_name(),
    }))
}

/// Route table shared by `main` and the integration tests. Auth routes are
/// open; everything under the guarded `/api` scope requires a bearer token.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .service(quiz_handler::list_quizzes)
                .service(quiz_handler::get_quiz)
                .service(quiz_handler::submit_quiz)
                .service(leaderboard_handler::get_leaderboard),
        );
}
