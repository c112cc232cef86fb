//! Field lookup tables
//!
//! Each key family has a closed set of members. A [`FieldTable`] maps every
//! field tag to its JSON member name and back; no name may be mapped twice.
//! The built-in tables are `static` items, so a duplicated member name is a
//! compile-time error rather than something discovered on first use.

use std::{borrow::Cow, fmt};

use crate::{JwaError, error::Result};

/// Two-way mapping between field tags and JSON member names
#[derive(Debug, Clone)]
pub struct FieldTable<T: Clone + 'static> {
    entries: Cow<'static, [(T, &'static str)]>,
}

const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl<T: Clone + 'static> FieldTable<T> {
    /// Builds a table from a literal list of pairs
    ///
    /// Panics if a member name appears twice. Used in `static` position the
    /// panic happens during constant evaluation and fails the build.
    pub const fn new(entries: &'static [(T, &'static str)]) -> Self {
        let mut i = 0;
        while i < entries.len() {
            let mut j = i + 1;
            while j < entries.len() {
                if same_name(entries[i].1, entries[j].1) {
                    panic!("field lookup table maps the same member name twice");
                }
                j += 1;
            }
            i += 1;
        }
        FieldTable {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(T, &'static str)> {
        self.entries.iter()
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> FieldTable<T> {
    /// Builds a table at runtime, rejecting a repeated tag or member name
    pub fn try_from_pairs(pairs: Vec<(T, &'static str)>) -> Result<Self> {
        for (i, (tag, name)) in pairs.iter().enumerate() {
            if pairs[..i].iter().any(|(t, n)| t == tag || n == name) {
                return Err(JwaError::DuplicateField(format!("{tag:?} => \"{name}\"")));
            }
        }
        Ok(FieldTable {
            entries: Cow::Owned(pairs),
        })
    }

    /// JSON member name for a tag
    pub fn name_of(&self, tag: &T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, name)| *name)
    }

    /// Tag for a JSON member name
    pub fn tag_of(&self, name: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(tag, _)| tag.clone())
    }

    /// Position of a tag in the table, used as the record slot
    pub(crate) fn slot_of(&self, tag: &T) -> Option<usize> {
        self.entries.iter().position(|(t, _)| t == tag)
    }
}

/// A member of one key family's closed field set
pub trait KeyField: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// JWK `kty` value of the family
    const FAMILY: &'static str;

    fn table() -> &'static FieldTable<Self>;

    /// Whether the member holds secret key material
    fn is_private(self) -> bool;

    /// JSON member name; the built-in tables are total so this never misses
    fn name(self) -> &'static str {
        Self::table().name_of(&self).unwrap_or_default()
    }
}

/// Elliptic curve key members (RFC 7518 §6.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcField {
    Curve,
    X,
    Y,
    PrivateScalar,
}

pub static EC_FIELDS: FieldTable<EcField> = FieldTable::new(&[
    (EcField::Curve, "crv"),
    (EcField::X, "x"),
    (EcField::Y, "y"),
    (EcField::PrivateScalar, "d"),
]);

impl KeyField for EcField {
    const FAMILY: &'static str = "EC";

    fn table() -> &'static FieldTable<Self> {
        &EC_FIELDS
    }

    fn is_private(self) -> bool {
        matches!(self, EcField::PrivateScalar)
    }
}

/// RSA key members (RFC 7518 §6.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaField {
    Modulus,
    Exponent,
    PrivateExponent,
    FirstPrime,
    SecondPrime,
    FirstCrtExponent,
    SecondCrtExponent,
    CrtCoefficient,
}

pub static RSA_FIELDS: FieldTable<RsaField> = FieldTable::new(&[
    (RsaField::Modulus, "n"),
    (RsaField::Exponent, "e"),
    (RsaField::PrivateExponent, "d"),
    (RsaField::FirstPrime, "p"),
    (RsaField::SecondPrime, "q"),
    (RsaField::FirstCrtExponent, "dp"),
    (RsaField::SecondCrtExponent, "dq"),
    (RsaField::CrtCoefficient, "qi"),
]);

impl KeyField for RsaField {
    const FAMILY: &'static str = "RSA";

    fn table() -> &'static FieldTable<Self> {
        &RSA_FIELDS
    }

    fn is_private(self) -> bool {
        !matches!(self, RsaField::Modulus | RsaField::Exponent)
    }
}

/// Symmetric key members (RFC 7518 §6.4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OctField {
    Key,
}

pub static OCT_FIELDS: FieldTable<OctField> = FieldTable::new(&[(OctField::Key, "k")]);

impl KeyField for OctField {
    const FAMILY: &'static str = "oct";

    fn table() -> &'static FieldTable<Self> {
        &OCT_FIELDS
    }

    fn is_private(self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every tag maps to exactly one name and that name maps back to it
    fn assert_bijection<F: KeyField>(all: &[F]) {
        assert_eq!(F::table().len(), all.len());
        for field in all {
            let name = F::table().name_of(field).expect("tag missing from table");
            assert_eq!(F::table().tag_of(name), Some(*field));
            assert_eq!(field.name(), name);
        }
    }

    #[test]
    fn ec_table_is_bijective() {
        assert_bijection(&[
            EcField::Curve,
            EcField::X,
            EcField::Y,
            EcField::PrivateScalar,
        ]);
        assert_eq!(EC_FIELDS.tag_of("crv"), Some(EcField::Curve));
        assert_eq!(EC_FIELDS.name_of(&EcField::PrivateScalar), Some("d"));
    }

    #[test]
    fn rsa_table_is_bijective() {
        assert_bijection(&[
            RsaField::Modulus,
            RsaField::Exponent,
            RsaField::PrivateExponent,
            RsaField::FirstPrime,
            RsaField::SecondPrime,
            RsaField::FirstCrtExponent,
            RsaField::SecondCrtExponent,
            RsaField::CrtCoefficient,
        ]);
        assert_eq!(RSA_FIELDS.tag_of("qi"), Some(RsaField::CrtCoefficient));
    }

    #[test]
    fn oct_table_is_bijective() {
        assert_bijection(&[OctField::Key]);
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(EC_FIELDS.tag_of("kty"), None);
        assert_eq!(EC_FIELDS.tag_of("CRV"), None);
        assert_eq!(RSA_FIELDS.tag_of(""), None);
    }

    #[test]
    fn private_members() {
        assert!(EcField::PrivateScalar.is_private());
        assert!(!EcField::X.is_private());
        assert!(RsaField::FirstCrtExponent.is_private());
        assert!(!RsaField::Modulus.is_private());
        assert!(OctField::Key.is_private());
    }

    #[test]
    fn runtime_table_rejects_duplicate_name() {
        let result = FieldTable::try_from_pairs(vec![(EcField::X, "x"), (EcField::Y, "x")]);
        assert!(matches!(result, Err(JwaError::DuplicateField(_))));
    }

    #[test]
    fn runtime_table_rejects_duplicate_tag() {
        let result = FieldTable::try_from_pairs(vec![(EcField::X, "x"), (EcField::X, "y")]);
        assert!(matches!(result, Err(JwaError::DuplicateField(_))));
    }

    #[test]
    fn runtime_table_lookup() {
        let table =
            FieldTable::try_from_pairs(vec![(OctField::Key, "k")]).expect("valid table");
        assert_eq!(table.tag_of("k"), Some(OctField::Key));
        assert_eq!(table.name_of(&OctField::Key), Some("k"));
    }

    #[test]
    #[should_panic(expected = "same member name twice")]
    fn const_table_rejects_duplicate_name() {
        // Evaluated at runtime here; in static position this fails the build
        let pairs: &'static [(EcField, &'static str)] =
            Box::leak(Box::new([(EcField::X, "x"), (EcField::Y, "x")]));
        let _ = FieldTable::new(pairs);
    }

    #[test]
    fn tables_are_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| RSA_FIELDS.tag_of("dq")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(RsaField::SecondCrtExponent));
        }
    }
}
