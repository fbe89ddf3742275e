use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Defines the required accessors and static metadata for every aggregate
/// in the system.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance accessors
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Business code of the record (e.g. "of-1a2b3c")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Aggregate class metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the DB (e.g. "client")
    fn collection_name() -> &'static str;

    /// Singular element name for the UI (e.g. "Client")
    fn element_name() -> &'static str;

    /// Plural list name for the UI (e.g. "Clients")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_client")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Prefix for DB tables (e.g. "a001_client_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
