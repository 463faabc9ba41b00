use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState, auth::AuthenticatedUser, errors::AppError,
    services::DEFAULT_LEADERBOARD_SIZE,
};

#[get("/leaderboard")]
pub async fn get_leaderboard(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let entries = state
        .leaderboard_service
        .top(DEFAULT_LEADERBOARD_SIZE)
        .await?;
    Ok(HttpResponse::Ok().json(entries))
}
