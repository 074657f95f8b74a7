//! Foreign-key display resolution for the parts screen.

use crate::models::Resource;

/// Looks up `key` in `collection` by identifier equality and returns the
/// matched row's display label. An unresolved key is rendered verbatim as
/// the fallback label — the row still displays, it just shows the raw
/// identifier. Presentation only; never consulted by validation or
/// persistence.
pub fn resolve_label<R: Resource>(collection: &[R], key: &R::Key) -> String {
    collection
        .iter()
        .find(|row| row.key() == *key)
        .map(|row| row.label())
        .unwrap_or_else(|| key.to_string())
}
