use uuid::Uuid;

use crate::store::Kind;

/// Namespace for every minted identifier. Changing it would re-key every
/// record in an existing database, so it is fixed for the life of the format.
const MINT_NAMESPACE: Uuid = uuid::uuid!("c6a2f8d4-31b7-45e9-9c0d-7e52a8b94f13");

/// Mints the identifier owning `natural_key` within `kind`.
///
/// Pure function of its inputs: the same kind and key always yield the same
/// identifier, across calls and across process restarts. This keeps racing
/// first-time creators convergent on one id, and lets an id be recomputed
/// from the natural key even if the name index is lost.
#[must_use]
pub fn id(kind: Kind, natural_key: &str) -> String {
    let seed = format!("{}:{}", kind.as_str(), natural_key);
    Uuid::new_v5(&MINT_NAMESPACE, seed.as_bytes()).to_string()
}
