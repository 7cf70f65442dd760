//! Well-known info dictionary keys

/// Info key whose string value is a prefix every entity reference of the
/// manager starts with. When present, hosts may classify reference
/// strings locally instead of asking the manager.
pub const INFO_KEY_ENTITY_REFERENCES_MATCH_PREFIX: &str = "entityReferencesMatchPrefix";
