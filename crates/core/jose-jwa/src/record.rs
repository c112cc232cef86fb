//! Key material records
//!
//! A [`KeyRecord`] holds the string members of one key family, exactly as
//! they appeared in the key document (base64url for integers, an identifier
//! for `crv`). Records start out empty and unparsed, are populated once by
//! the parser and are read-only afterwards.
//!
//! Validity is structural only: a record is valid when no recognized member
//! had the wrong JSON type. Missing members are reported later, by whichever
//! operation needs them.

use std::{fmt, marker::PhantomData};

use serde_json::Value;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    JwaError, KeyDocument,
    error::Result,
    field::{EcField, KeyField, OctField, RsaField},
    parser,
};

/// Outcome of populating a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseState {
    Unparsed,
    Valid,
    /// Recognized member with a non-string value
    Malformed(&'static str),
    /// Input was not a JSON object
    InvalidDocument(String),
}

/// String members of one key family plus its parse outcome
#[derive(Clone, PartialEq)]
pub struct KeyRecord<F: KeyField> {
    values: Vec<String>,
    state: ParseState,
    family: PhantomData<F>,
}

pub type EcKey = KeyRecord<EcField>;
pub type RsaKey = KeyRecord<RsaField>;
pub type OctKey = KeyRecord<OctField>;

impl<F: KeyField> Default for KeyRecord<F> {
    fn default() -> Self {
        KeyRecord {
            values: vec![String::new(); F::table().len()],
            state: ParseState::Unparsed,
            family: PhantomData,
        }
    }
}

impl<F: KeyField> KeyRecord<F> {
    /// Parses a key from JSON text
    ///
    /// Text that isn't a JSON object produces an invalid, empty record.
    pub fn from_json(json: &str) -> Self {
        match KeyDocument::from_json_str(json) {
            Ok(doc) => parser::parse(&doc),
            Err(e) => {
                warn!(family = F::FAMILY, "Key document couldn't be parsed: {e}");
                Self::with_state(ParseState::InvalidDocument(e.to_string()))
            }
        }
    }

    /// Parses a key from an already-parsed JSON value
    pub fn from_value(value: &Value) -> Self {
        match KeyDocument::try_from(value) {
            Ok(doc) => parser::parse(&doc),
            Err(e) => {
                warn!(family = F::FAMILY, "{e}");
                Self::with_state(ParseState::InvalidDocument(e.to_string()))
            }
        }
    }

    /// Parses a key from a key document
    pub fn from_document(doc: &KeyDocument) -> Self {
        parser::parse(doc)
    }

    fn with_state(state: ParseState) -> Self {
        let mut key = Self::default();
        key.state = state;
        key
    }

    /// Member value, empty when absent
    pub fn get(&self, field: F) -> &str {
        F::table()
            .slot_of(&field)
            .and_then(|slot| self.values.get(slot))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Member value, or `IncompleteKey` when it is empty
    pub fn require(&self, field: F) -> Result<&str> {
        match self.get(field) {
            "" => Err(JwaError::IncompleteKey(field.name())),
            value => Ok(value),
        }
    }

    /// True only after a parse in which every recognized member was a string
    pub fn is_valid(&self) -> bool {
        self.state == ParseState::Valid
    }

    /// Converts the validity flag into an error for use with `?`
    pub fn ensure_valid(&self) -> Result<&Self> {
        match &self.state {
            ParseState::Valid => Ok(self),
            ParseState::Unparsed => Err(JwaError::UnparsedKey),
            ParseState::Malformed(member) => Err(JwaError::MalformedField(*member)),
            ParseState::InvalidDocument(reason) => {
                Err(JwaError::InvalidDocument(reason.clone()))
            }
        }
    }

    pub(crate) fn set(&mut self, field: F, value: &str) {
        let slot = F::table().slot_of(&field);
        if let Some(current) = slot.and_then(|slot| self.values.get_mut(slot)) {
            current.zeroize();
            current.push_str(value);
        }
    }

    pub(crate) fn finish(&mut self, state: ParseState) {
        self.state = state;
    }
}

impl KeyRecord<EcField> {
    pub fn crv(&self) -> &str {
        self.get(EcField::Curve)
    }

    pub fn x(&self) -> &str {
        self.get(EcField::X)
    }

    pub fn y(&self) -> &str {
        self.get(EcField::Y)
    }

    pub fn d(&self) -> &str {
        self.get(EcField::PrivateScalar)
    }
}

impl KeyRecord<RsaField> {
    pub fn n(&self) -> &str {
        self.get(RsaField::Modulus)
    }

    pub fn e(&self) -> &str {
        self.get(RsaField::Exponent)
    }

    pub fn d(&self) -> &str {
        self.get(RsaField::PrivateExponent)
    }

    pub fn p(&self) -> &str {
        self.get(RsaField::FirstPrime)
    }

    pub fn q(&self) -> &str {
        self.get(RsaField::SecondPrime)
    }

    pub fn dp(&self) -> &str {
        self.get(RsaField::FirstCrtExponent)
    }

    pub fn dq(&self) -> &str {
        self.get(RsaField::SecondCrtExponent)
    }

    pub fn qi(&self) -> &str {
        self.get(RsaField::CrtCoefficient)
    }

    /// Whether the private exponent is present
    pub fn is_private(&self) -> bool {
        !self.d().is_empty()
    }

    /// Copy holding only `n` and `e`; the parse outcome is kept
    pub fn to_public(&self) -> Self {
        let mut public = Self::with_state(self.state.clone());
        public.set(RsaField::Modulus, self.n());
        public.set(RsaField::Exponent, self.e());
        public
    }
}

impl KeyRecord<OctField> {
    pub fn k(&self) -> &str {
        self.get(OctField::Key)
    }
}

impl<F: KeyField> Zeroize for KeyRecord<F> {
    fn zeroize(&mut self) {
        self.values.zeroize();
    }
}

impl<F: KeyField> Drop for KeyRecord<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: KeyField> ZeroizeOnDrop for KeyRecord<F> {}

impl<F: KeyField> fmt::Debug for KeyRecord<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("KeyRecord");
        out.field("kty", &F::FAMILY);
        for (field, name) in F::table().iter() {
            let value = self.get(*field);
            if field.is_private() && !value.is_empty() {
                out.field(name, &"<redacted>");
            } else {
                out.field(name, &value);
            }
        }
        out.field("valid", &self.is_valid()).finish()
    }
}
