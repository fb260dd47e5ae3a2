mod locks;
mod repository;
mod social;
mod tag;

pub use locks::KeyLocks;
pub use repository::RepositoryManager;
pub use social::{Comments, Privileges, Stars};
pub use tag::TagManager;

use crate::error::Result;

/// Existence oracle for image records. Owned by the image/blob subsystem;
/// this core only asks whether an image id is known before a tag may
/// reference it.
pub trait ImageIndex: Send + Sync {
    fn has(&self, image_id: &str) -> Result<bool>;
}
