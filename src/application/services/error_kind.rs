/// Coarse classification of a failure, independent of which collaborator raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidEntity,
    Conflicted,
    /// The caller sent more data than the service accepts.
    TooLarge,
    Internal,
}
