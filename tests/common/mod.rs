#![allow(dead_code)]

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use product_catalog::application::services::ProductService;
use product_catalog::infrastructure::auth::{AuthClaims, StaticKeyVerifier};
use product_catalog::infrastructure::persistence::PgProductRepository;
use product_catalog::state::AppState;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

/// RSA keypair used to mint and verify test credentials.
pub const TEST_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/jwt_test_key.pem");
pub const TEST_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/jwt_test_key.pub.pem");

/// A second private key the verifier does not trust.
pub const UNTRUSTED_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/jwt_other_key.pem");

/// Builds application state over the given pool, with a fixed-key verifier
/// in place of the remote key set.
pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let product_repo = Arc::new(PgProductRepository::new(pool));
    let product_service = Arc::new(ProductService::new(product_repo));

    let verifier = Arc::new(
        StaticKeyVerifier::from_rsa_pem(TEST_PUBLIC_KEY_PEM.as_bytes())
            .expect("test public key must parse"),
    );

    AppState::new(product_service, verifier)
}

fn sign(claims: &AuthClaims, private_key_pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some("test-key".to_string());

    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .expect("test private key must parse");

    encode(&header, claims, &key).expect("token encoding must succeed")
}

/// Mints a credential valid for one hour.
pub fn mint_token() -> String {
    let now = Utc::now().timestamp();
    sign(
        &AuthClaims {
            sub: "user-1".to_string(),
            scope: Some("catalog/write".to_string()),
            exp: now + 3600,
            iat: Some(now),
        },
        TEST_PRIVATE_KEY_PEM,
    )
}

/// Mints a credential that expired well past the validation leeway.
pub fn mint_expired_token() -> String {
    let now = Utc::now().timestamp();
    sign(
        &AuthClaims {
            sub: "user-1".to_string(),
            scope: None,
            exp: now - 600,
            iat: Some(now - 1200),
        },
        TEST_PRIVATE_KEY_PEM,
    )
}

/// Mints a valid credential whose header carries no key id.
pub fn mint_token_without_kid() -> String {
    let now = Utc::now().timestamp();
    let claims = AuthClaims {
        sub: "user-1".to_string(),
        scope: None,
        exp: now + 3600,
        iat: Some(now),
    };

    let key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY_PEM.as_bytes())
        .expect("test private key must parse");

    encode(&Header::new(Algorithm::RS256), &claims, &key).expect("token encoding must succeed")
}

/// Mints a well-formed credential signed by a key the verifier does not trust.
pub fn mint_untrusted_token() -> String {
    let now = Utc::now().timestamp();
    sign(
        &AuthClaims {
            sub: "user-1".to_string(),
            scope: None,
            exp: now + 3600,
            iat: Some(now),
        },
        UNTRUSTED_PRIVATE_KEY_PEM,
    )
}

/// `Authorization` header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Inserts a product row directly, bypassing the API.
pub async fn seed_product(pool: &PgPool, product_id: &str) {
    sqlx::query(
        "INSERT INTO products \
             (product_id, name, description, price, stock_quantity, category, image_url) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(product_id)
    .bind("Widget")
    .bind("A widget")
    .bind(Decimal::new(999, 2))
    .bind(5_i32)
    .bind("tools")
    .bind("http://x/img.png")
    .execute(pool)
    .await
    .unwrap();
}

/// Total number of product rows.
pub async fn count_products(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .unwrap()
}
