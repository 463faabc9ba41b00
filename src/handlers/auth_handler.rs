use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::User};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .account_service
        .register(&request.username, &request.email, &request.password)
        .await?;
    let token = state.jwt_service.issue(&user)?;

    log::info!("registered user '{}'", user.username);

    Ok(HttpResponse::Ok().json(AuthResponse { token, user }))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .account_service
        .login(&request.email, &request.password)
        .await?;
    let token = state.jwt_service.issue(&user)?;

    Ok(HttpResponse::Ok().json(AuthResponse { token, user }))
}
