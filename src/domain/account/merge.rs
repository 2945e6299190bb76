//! Partial-update merge
//!
//! Computes the next account state from a stored record plus a
//! client-supplied partial document. Protected fields in the patch are
//! dropped silently; the merged document is re-typed through
//! [`Account::from_document`] so derived defaults regenerate for anything
//! absent on both sides.

use serde_json::{Map, Value};

use crate::domain::account::model::{Account, AccountDocument};
use crate::domain::error::{DomainError, DomainResult};

/// Document keys a client patch can never touch. Only server-internal
/// operations (signup, second-factor challenges) write these.
pub const PROTECTED_FIELDS: [&str; 19] = [
    "password",
    "verification_codes",
    "payment_tokens",
    "username",
    "eggs",
    "eggs_funded",
    "eggs_archived",
    "eggs_bookmarked",
    "interests",
    "comments",
    "followers",
    "follows",
    "previous_usernames",
    "transactions",
    "notifications",
    "preferences",
    "_schema_version_",
    "_id",
    "recent_searches",
];

pub fn is_protected(field: &str) -> bool {
    PROTECTED_FIELDS.contains(&field)
}

/// Overlay `requested` onto `stored`, skipping protected keys, and re-type
/// the result. A patch value that does not fit its field's type is a
/// `BadRequest`; the merge never partially applies.
pub fn apply_update(stored: &Account, requested: &Map<String, Value>) -> DomainResult<Account> {
    let mut document = stored.to_document();
    for (field, value) in requested {
        if is_protected(field) {
            continue;
        }
        document.insert(field.clone(), value.clone());
    }

    let document: AccountDocument = serde_json::from_value(Value::Object(document))
        .map_err(|e| DomainError::BadRequest(format!("Invalid field value in update request: {e}")))?;
    Ok(Account::from_document(document))
}
