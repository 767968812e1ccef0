use uuid::Uuid;

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000";
const TEST_JWT_SECRET: &str = "your-secret-key"; // Should match your JWT_SECRET

/// Helper function to create test JWT tokens
fn create_test_jwt(user_id: Uuid, username: &str, email: &str) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    #[derive(serde::Serialize)]
    struct TestClaims {
        sub: Uuid,
        email: String,
        username: String,
        exp: u64,
        iat: u64,
        jti: String,
    }

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = TestClaims {
        sub: user_id,
        email: email.to_string(),
        username: username.to_string(),
        exp: now + 3600, // 1 hour from now
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_ref()),
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "requires running server"]
async fn generate_plan_requires_authentication() {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/plans/generate", BASE_URL))
        .json(&serde_json::json!({
            "planName": "Spring 10k",
            "goal": "10k",
            "trainingFrequency": 4
        }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn malformed_bearer_token_is_rejected() {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/plans", BASE_URL))
        .bearer_auth("not-a-valid-token")
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
#[ignore = "requires running server"]
async fn unknown_user_token_is_rejected() {
    // Structurally valid token for a user id that does not exist.
    let token = create_test_jwt(Uuid::new_v4(), "ghost", "ghost@example.com");

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/plans", BASE_URL))
        .bearer_auth(token)
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status().as_u16(), 401);
}
