use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{Claims, JwtService},
    errors::AppError,
};

/// Bearer-token guard for the quiz and leaderboard routes. A missing header
/// is `Unauthenticated`, a header that fails verification is `InvalidToken`;
/// both surface as 401 with an `{ "error": ... }` body.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let jwt_service = match req.app_data::<web::Data<JwtService>>() {
                Some(service) => service.clone(),
                None => {
                    let err = AppError::Internal("JWT service not configured".to_string());
                    return Ok(req.into_response(err.error_response().map_into_right_body()));
                }
            };

            let auth_header = match req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
            {
                Some(header) => header,
                None => {
                    let err = AppError::Unauthenticated;
                    return Ok(req.into_response(err.error_response().map_into_right_body()));
                }
            };

            // A header without the Bearer prefix is passed through whole and
            // rejected by signature verification.
            let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

            let claims = match jwt_service.verify(token) {
                Ok(claims) => claims,
                Err(err) => {
                    return Ok(req.into_response(err.error_response().map_into_right_body()));
                }
            };

            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extractor handing verified claims to handlers behind [`AuthMiddleware`].
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or(AppError::Unauthenticated);

        ready(claims.map(AuthenticatedUser))
    }
}
