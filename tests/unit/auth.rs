use std::time::Duration;

use runova_backend::db::models::auth::AuthUser;
use runova_backend::middleware::auth::{AuthConfig, AuthService};

fn service(secret: &str) -> AuthService {
    AuthService::new(AuthConfig {
        jwt_secret: secret.to_string(),
        jwt_expiration: Duration::from_secs(3600),
        refresh_expiration: Duration::from_secs(7 * 24 * 3600),
    })
}

fn test_user() -> AuthUser {
    AuthUser {
        id: uuid::Uuid::new_v4(),
        email: "runner@example.com".to_string(),
        username: "runner".to_string(),
        name: "Runner".to_string(),
    }
}

#[test]
fn access_token_round_trip() {
    let auth = service("unit-test-secret");
    let user = test_user();

    let token = auth.generate_access_token(&user).unwrap();
    let claims = auth.verify_token(&token).unwrap();

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.username, user.username);
}

#[test]
fn refresh_token_round_trip() {
    let auth = service("unit-test-secret");
    let user_id = uuid::Uuid::new_v4();

    let token = auth.generate_refresh_token(user_id).unwrap();
    let claims = auth.verify_refresh_token(&token).unwrap();

    assert_eq!(claims.sub, user_id);
}

#[test]
fn token_from_another_secret_is_rejected() {
    let issuer = service("secret-a");
    let verifier = service("secret-b");

    let token = issuer.generate_access_token(&test_user()).unwrap();
    assert!(verifier.verify_token(&token).is_err());
}

#[test]
fn garbage_token_is_rejected() {
    let auth = service("unit-test-secret");
    assert!(auth.verify_token("not-a-token").is_err());
}
