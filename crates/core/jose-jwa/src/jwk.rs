//! Key documents tagged with `kty`

use serde_json::Value;

use crate::{
    EcKey, JwaError, KeyDocument, OctKey, RsaKey,
    error::Result,
    field::{EcField, KeyField, OctField, RsaField},
};

/// A key record of whichever family the document's `kty` names
#[derive(Debug, Clone, PartialEq)]
pub enum Jwk {
    Ec(EcKey),
    Rsa(RsaKey),
    Oct(OctKey),
}

impl Jwk {
    /// Parses JSON text and selects the record family from `kty`
    pub fn from_json(json: &str) -> Result<Self> {
        let doc = KeyDocument::from_json_str(json)
            .map_err(|e| JwaError::InvalidDocument(e.to_string()))?;
        Self::from_document(&doc)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_document(&KeyDocument::try_from(value)?)
    }

    pub fn from_document(doc: &KeyDocument) -> Result<Self> {
        match doc.get("kty") {
            Some(Value::String(kty)) => match kty.as_str() {
                EcField::FAMILY => Ok(Jwk::Ec(EcKey::from_document(doc))),
                RsaField::FAMILY => Ok(Jwk::Rsa(RsaKey::from_document(doc))),
                OctField::FAMILY => Ok(Jwk::Oct(OctKey::from_document(doc))),
                other => Err(JwaError::UnsupportedKeyType(other.to_string())),
            },
            Some(_) => Err(JwaError::MalformedField("kty")),
            None => Err(JwaError::IncompleteKey("kty")),
        }
    }

    pub fn kty(&self) -> &'static str {
        match self {
            Jwk::Ec(_) => EcField::FAMILY,
            Jwk::Rsa(_) => RsaField::FAMILY,
            Jwk::Oct(_) => OctField::FAMILY,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Jwk::Ec(key) => key.is_valid(),
            Jwk::Rsa(key) => key.is_valid(),
            Jwk::Oct(key) => key.is_valid(),
        }
    }
}

impl From<EcKey> for Jwk {
    fn from(key: EcKey) -> Self {
        Jwk::Ec(key)
    }
}

impl From<RsaKey> for Jwk {
    fn from(key: RsaKey) -> Self {
        Jwk::Rsa(key)
    }
}

impl From<OctKey> for Jwk {
    fn from(key: OctKey) -> Self {
        Jwk::Oct(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_family_from_kty() {
        let jwk = Jwk::from_json(r#"{"kty":"EC","crv":"P-256","x":"eA","y":"eQ"}"#).unwrap();
        let Jwk::Ec(key) = &jwk else {
            panic!("Expected EC key");
        };
        assert_eq!(key.crv(), "P-256");
        assert_eq!(jwk.kty(), "EC");

        assert!(matches!(
            Jwk::from_json(r#"{"kty":"RSA","n":"bg","e":"AQAB"}"#).unwrap(),
            Jwk::Rsa(_)
        ));
        assert!(matches!(
            Jwk::from_json(r#"{"kty":"oct","k":"c2VjcmV0"}"#).unwrap(),
            Jwk::Oct(_)
        ));
    }

    #[test]
    fn structural_errors_stay_in_the_record() {
        let jwk = Jwk::from_json(r#"{"kty":"RSA","n":12}"#).unwrap();
        assert!(!jwk.is_valid());
    }

    #[test]
    fn kty_problems() {
        assert!(matches!(
            Jwk::from_json(r#"{"crv":"P-256"}"#),
            Err(JwaError::IncompleteKey("kty"))
        ));
        assert!(matches!(
            Jwk::from_json(r#"{"kty":1}"#),
            Err(JwaError::MalformedField("kty"))
        ));
        assert!(matches!(
            Jwk::from_json(r#"{"kty":"OKP","crv":"Ed25519"}"#),
            Err(JwaError::UnsupportedKeyType(kty)) if kty == "OKP"
        ));
        assert!(matches!(
            Jwk::from_json("[]"),
            Err(JwaError::InvalidDocument(_))
        ));
    }
}
