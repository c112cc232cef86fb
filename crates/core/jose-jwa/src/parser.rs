//! Key document parser
//!
//! Walks the document's members in order. Unrecognized members are skipped.
//! A recognized member must be a JSON string; the first one that isn't stops
//! the walk and marks the record invalid, keeping whatever was copied before
//! it. Repeated members overwrite earlier ones.

use tracing::{debug, warn};

use crate::{
    KeyDocument,
    document::json_type,
    field::KeyField,
    record::{KeyRecord, ParseState},
};

/// Single entry point every record constructor funnels into
pub(crate) fn parse<F: KeyField>(doc: &KeyDocument) -> KeyRecord<F> {
    let mut key = KeyRecord::<F>::default();
    let state = populate(&mut key, doc);
    key.finish(state);
    key
}

fn populate<F: KeyField>(key: &mut KeyRecord<F>, doc: &KeyDocument) -> ParseState {
    for (member, value) in doc.members() {
        let Some(field) = F::table().tag_of(member) else {
            debug!(family = F::FAMILY, member, "skipping unrecognized member");
            continue;
        };
        let Some(text) = value.as_str() else {
            warn!(
                family = F::FAMILY,
                member,
                found = json_type(value),
                "recognized key member isn't a string"
            );
            return ParseState::Malformed(field.name());
        };
        key.set(field, text);
    }
    ParseState::Valid
}
