use std::sync::Arc;

use tracing::info;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::LoginAccount;
use crate::repositories::{AdminRepository, MechanicRepository};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_required;

const LOGIN_FAILED: &str = "Error al iniciar sesión";

/// Login de mecánicos y administradores. Solo verifica credenciales:
/// no emite tokens ni abre sesión.
pub struct AuthController {
    mechanics: Arc<dyn MechanicRepository>,
    admins: Arc<dyn AdminRepository>,
}

impl AuthController {
    pub fn new(mechanics: Arc<dyn MechanicRepository>, admins: Arc<dyn AdminRepository>) -> Self {
        Self { mechanics, admins }
    }

    pub async fn login_mechanic(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let (email, password) = credentials(request)?;
        let mechanic = self
            .mechanics
            .find_by_email(&email)
            .await
            .map_err(|e| AppError::database(LOGIN_FAILED, e))?;

        check_credentials(mechanic, &password, "Mecánico no encontrado")
    }

    pub async fn login_admin(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let (email, password) = credentials(request)?;
        let admin = self
            .admins
            .find_by_email(&email)
            .await
            .map_err(|e| AppError::database(LOGIN_FAILED, e))?;

        check_credentials(admin, &password, "Administrador no encontrado")
    }
}

fn credentials(request: LoginRequest) -> AppResult<(String, String)> {
    validate_required(&request, "Faltan campos obligatorios")?;
    Ok((
        request.email.unwrap_or_default(),
        request.password.unwrap_or_default(),
    ))
}

/// 404 si la cuenta no existe, 401 si la contraseña no coincide exactamente
fn check_credentials<A: LoginAccount>(
    account: Option<A>,
    password: &str,
    not_found: &str,
) -> AppResult<LoginResponse> {
    let account = account.ok_or_else(|| AppError::NotFound(not_found.to_string()))?;

    if !account.password_matches(password) {
        return Err(AppError::Unauthorized("Contraseña incorrecta".to_string()));
    }

    info!("🔑 Login exitoso: {} {}", A::ROLE.as_str(), account.account_id());
    Ok(LoginResponse::success(account.account_id(), A::ROLE))
}
