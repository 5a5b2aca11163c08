//! Field names reserved for internal bookkeeping.

/// Names of the per-instance cache slots. Models may not declare fields with
/// these names, and they never appear among an instance's serializable fields.
pub const RESERVED_FIELD_NAMES: &[&str] = &["__rimo_field_cache", "__rimo_access_map"];

/// Returns true if `name` is reserved for internal bookkeeping.
pub fn is_reserved_field(name: &str) -> bool {
    RESERVED_FIELD_NAMES.contains(&name)
}
