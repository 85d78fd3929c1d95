use actix_web::{web, HttpResponse};

use crate::database::model::user::NewUser;
use crate::form::user::{LoginFormData, RegisterFormData};
use crate::handler::error::ApiError;
use crate::store::UserStore;

pub async fn login(
    store: web::Data<dyn UserStore>,
    form: web::Json<LoginFormData>,
) -> Result<HttpResponse, ApiError> {
    let LoginFormData { email, password } = form.into_inner();

    let user = web::block(move || store.authenticate(&email, &password)).await??;

    log::info!("user {} logged in", user.id);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": format!("Welcome back, {}", user.name),
        "user": user.to_json(),
    })))
}

pub async fn register(
    store: web::Data<dyn UserStore>,
    form: web::Json<RegisterFormData>,
) -> Result<HttpResponse, ApiError> {
    let new_user: NewUser = form.into_inner().into();

    let user = web::block(move || store.register(new_user)).await??;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Account created successfully",
        "user": user.to_json(),
    })))
}

pub async fn default_handler() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
