use bcrypt::{hash, verify};
use diesel::prelude::*;

use crate::{
    db::models::api::error_codes,
    db::models::auth::{
        AuthUser, LoginRequest, LoginResponse, NewUser, NewUserCredential, RefreshTokenRequest,
        RegisterRequest, User,
    },
    db::repositories::AuthRepo,
    error::AppError,
    services::context::RequestContext,
};

pub struct AuthService;

impl AuthService {
    /// Create the user row and its password credential in one transaction.
    pub fn register(
        conn: &mut PgConnection,
        req: &RegisterRequest,
        bcrypt_cost: u32,
    ) -> Result<User, AppError> {
        if AuthRepo::exists_by_email(conn, &req.email)? {
            return Err(AppError::conflict_with_code(
                "Email address already exists",
                Some("email".to_string()),
                error_codes::USER_EMAIL_EXISTS,
            ));
        }

        if AuthRepo::exists_by_username(conn, &req.username)? {
            return Err(AppError::conflict_with_code(
                "Username already exists",
                Some("username".to_string()),
                error_codes::USER_USERNAME_EXISTS,
            ));
        }

        let password_hash = hash(req.password.as_bytes(), bcrypt_cost)?;

        let user = conn.transaction::<User, AppError, _>(|conn| {
            let user = AuthRepo::insert_user(
                conn,
                &NewUser {
                    email: req.email.clone(),
                    username: req.username.clone(),
                    name: req.name.clone(),
                    avatar_url: None,
                },
            )?;

            AuthRepo::insert_credential(
                conn,
                &NewUserCredential {
                    user_id: user.id,
                    credential_type: "password".to_string(),
                    credential_hash: Some(password_hash.clone()),
                    is_primary: true,
                },
            )?;

            Ok(user)
        })?;

        Ok(user)
    }

    pub fn login(
        conn: &mut PgConnection,
        tokens: &crate::middleware::auth::AuthService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let user = AuthRepo::find_by_email(conn, &req.email)?
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;

        let credential = AuthRepo::find_primary_credential(conn, user.id)?
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;
        let credential_hash = credential
            .credential_hash
            .as_deref()
            .ok_or_else(|| AppError::auth("Invalid email or password"))?;

        if !verify(&req.password, credential_hash)? {
            return Err(AppError::auth("Invalid email or password"));
        }

        Self::issue_tokens(tokens, &user)
    }

    pub fn refresh(
        conn: &mut PgConnection,
        tokens: &crate::middleware::auth::AuthService,
        req: &RefreshTokenRequest,
    ) -> Result<LoginResponse, AppError> {
        let claims = tokens.verify_refresh_token(&req.refresh_token)?;

        let user = AuthRepo::find_by_id(conn, claims.sub)?
            .ok_or_else(|| AppError::auth("User not found or inactive"))?;

        Self::issue_tokens(tokens, &user)
    }

    pub fn profile(conn: &mut PgConnection, ctx: &RequestContext) -> Result<User, AppError> {
        AuthRepo::find_by_id(conn, ctx.user_id)?.ok_or_else(|| AppError::not_found("user"))
    }

    fn issue_tokens(
        tokens: &crate::middleware::auth::AuthService,
        user: &User,
    ) -> Result<LoginResponse, AppError> {
        let auth_user = AuthUser::from(user);
        let access_token = tokens.generate_access_token(&auth_user)?;
        let refresh_token = tokens.generate_refresh_token(user.id)?;

        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.access_token_ttl().as_secs() as i64,
            user: auth_user,
        })
    }
}
