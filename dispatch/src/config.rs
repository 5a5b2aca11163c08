//! Configuration for accessor dispatch.

/// Options controlling how requests are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Answer unrecognized zero-argument requests that name a declared field
    /// with that field's value, and other zero-argument requests with null.
    pub legacy_field_fallback: bool,
    /// Suffix appended when the name given to `add`/`remove` is unknown, so
    /// `addTag` reaches `tags` on a model without a `tag` field.
    pub collection_suffix: Option<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            legacy_field_fallback: false,
            collection_suffix: Some("s".to_string()),
        }
    }
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with the legacy field fallback turned on.
    pub fn legacy() -> Self {
        Self::default().with_legacy_field_fallback(true)
    }

    pub fn with_legacy_field_fallback(mut self, enabled: bool) -> Self {
        self.legacy_field_fallback = enabled;
        self
    }

    pub fn with_collection_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.collection_suffix = Some(suffix.into());
        self
    }

    pub fn without_collection_suffix(mut self) -> Self {
        self.collection_suffix = None;
        self
    }
}
