mod common;

use product_catalog::error::AppError;
use product_catalog::infrastructure::auth::{CredentialVerifier, JwksVerifier, StaticKeyVerifier};

fn make_verifier() -> StaticKeyVerifier {
    StaticKeyVerifier::from_rsa_pem(common::TEST_PUBLIC_KEY_PEM.as_bytes())
        .expect("test public key must parse")
}

#[tokio::test]
async fn test_valid_token_yields_claims() {
    let verifier = make_verifier();

    let claims = verifier.verify(&common::mint_token()).await.unwrap();

    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.scope.as_deref(), Some("catalog/write"));
    assert!(claims.exp > claims.iat.unwrap());
}

#[tokio::test]
async fn test_bearer_prefix_is_stripped() {
    let verifier = make_verifier();

    let with_prefix = common::bearer(&common::mint_token());
    assert!(verifier.verify(&with_prefix).await.is_ok());
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let verifier = make_verifier();

    let err = verifier
        .verify(&common::mint_expired_token())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_untrusted_signature_is_rejected() {
    let verifier = make_verifier();

    let err = verifier
        .verify(&common::mint_untrusted_token())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let verifier = make_verifier();

    assert!(verifier.verify("not.a.jwt").await.is_err());
    assert!(verifier.verify("").await.is_err());
}

// ─── Remote key set ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unreachable_key_set_rejects_credential() {
    // Nothing listens on port 1; the fetch fails and the credential is
    // rejected like any other verification failure.
    let verifier = JwksVerifier::new("http://127.0.0.1:1/.well-known/jwks.json".to_string());

    let err = verifier.verify(&common::mint_token()).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_token_without_key_id_is_rejected_before_fetch() {
    // The key set cannot be consulted without a kid, so rejection happens
    // before any network access. The unresolvable hostname would make a
    // fetch attempt fail loudly if one ever happened.
    let verifier =
        JwksVerifier::new("https://jwks.invalid/.well-known/jwks.json".to_string());

    let err = verifier
        .verify(&common::mint_token_without_kid())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized { .. }));
}
