use uuid::Uuid;

use crate::application::ports::IdGenerator;

/// UUIDv7: a millisecond timestamp followed by random bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
