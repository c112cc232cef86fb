use std::{sync::Arc, thread};

use jose_jwa::{
    Algorithm, Dispatcher, EcKey, HashFunc, JwaError, Jwk, KeyDocument, OctKey, RsaKey, ToPem,
    hmac_sign, hmac_verify,
};
use serde_json::json;
use tracing_subscriber::filter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .try_init();
}

// RFC 7515 appendix A.1 key
const HS256_JWK: &str = r#"{"kty":"oct",
 "k":"AyM1SysPpbyDfgZld3umj1qzKObwVMkoqQ-EstJQLr_T-1qS0gZH75aKtMN3Yj0iPS4hcgUuTwjAzZr1Z9CAow"}"#;

#[test]
fn rfc7515_hs256_signature() {
    init_tracing();
    let signing_input = b"eyJ0eXAiOiJKV1QiLA0KICJhbGciOiJIUzI1NiJ9.eyJpc3MiOiJqb2UiLA0KICJleHAiOjEzMDA4MTkzODAsDQogImh0dHA6Ly9leGFtcGxlLmNvbS9pc19yb290Ijp0cnVlfQ";
    let expected = jose_encoding::urlsafe_base64_decode("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk")
        .unwrap();

    let jwk = Jwk::from_json(HS256_JWK).unwrap();
    let dispatcher: Dispatcher = Dispatcher::default();
    let tag = dispatcher.sign(Algorithm::HS256, signing_input, &jwk).unwrap();
    assert_eq!(tag, expected);
    assert!(dispatcher.verify(Algorithm::HS256, signing_input, &jwk, &tag).unwrap());
}

#[test]
fn hmac_round_trip_every_hash() {
    init_tracing();
    for (hash, len) in [
        (HashFunc::Sha256, 32),
        (HashFunc::Sha384, 48),
        (HashFunc::Sha512, 64),
    ] {
        let tag = hmac_sign(hash, b"data", b"key").unwrap();
        assert_eq!(tag.len(), len);
        assert!(hmac_verify(hash, b"data", b"key", &tag).unwrap());
        assert!(!hmac_verify(hash, b"data", b"other key", &tag).unwrap());
    }
    assert!(matches!(
        hmac_sign(HashFunc::None, b"data", b"key"),
        Err(JwaError::UnsupportedHash(_))
    ));
}

#[test]
fn algorithm_must_match_key_family() {
    init_tracing();
    let jwk = Jwk::from_json(HS256_JWK).unwrap();
    let dispatcher: Dispatcher = Dispatcher::default();
    assert!(matches!(
        dispatcher.sign(Algorithm::RS256, b"data", &jwk),
        Err(JwaError::KeyMismatch { kty: "oct", .. })
    ));
}

#[test]
fn document_order_and_repeats_are_kept() {
    let doc = KeyDocument::from_json_str(r#"{"k":"YQ","kty":"oct","k":"Yg"}"#).unwrap();
    let names: Vec<&str> = doc.members().map(|(name, _)| name).collect();
    assert_eq!(names, ["k", "kty", "k"]);
    assert_eq!(OctKey::from_document(&doc).k(), "Yg");
}

#[test]
fn one_document_many_families() {
    let doc = json!({
        "kty": "EC",
        "crv": "P-256",
        "x": "eA",
        "y": "eQ",
        "n": 5,
    });
    // The RSA table sees a malformed member, the EC table doesn't
    assert!(EcKey::from_value(&doc).is_valid());
    assert!(!RsaKey::from_value(&doc).is_valid());
    assert_eq!(EcKey::from_value(&doc).to_pem(), "");
}

#[test]
fn records_parse_and_sign_across_threads() {
    init_tracing();
    let doc = Arc::new(KeyDocument::from_json_str(HS256_JWK).unwrap());
    let dispatcher: Arc<Dispatcher> = Arc::new(Dispatcher::default());

    let tags: Vec<Vec<u8>> = (0..8)
        .map(|_| {
            let doc = Arc::clone(&doc);
            let dispatcher = Arc::clone(&dispatcher);
            thread::spawn(move || {
                let key = OctKey::from_document(&doc);
                dispatcher.oct_sign(HashFunc::Sha512, b"shared", &key).unwrap()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(tags.windows(2).all(|pair| pair[0] == pair[1]));
}
