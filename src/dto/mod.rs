//! Request payloads.
//!
//! Users are written with a full-replace strategy: every field must be present
//! ([`users::UserPayload::require`]). Orders and offers are written with a
//! partial merge: only keys present in the body are applied, and an explicit
//! `null` clears the column.
//!
//! Every payload also accepts an `id`. The seed loader keeps it; HTTP writes
//! ignore it and let the database generate the key.

use serde::{Deserialize, Deserializer};

pub mod offers;
pub mod orders;
pub mod users;

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
