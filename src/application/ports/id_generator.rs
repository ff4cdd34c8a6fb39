/// Source of unique, non-sequential identifiers.
///
/// Generation cannot fail from the caller's point of view; an unavailable
/// entropy source is treated as fatal by the implementation.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}
