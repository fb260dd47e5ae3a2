//! Auxiliary social/ACL records: simple associative facts attached to a
//! repository, persisted directly with no orchestration or invariant
//! enforcement.

use std::sync::Arc;

use crate::error::Result;
use crate::store::{KvStore, RecordStore};
use crate::types::{Comment, Privilege, Star};

pub struct Stars {
    records: RecordStore,
}

impl Stars {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            records: RecordStore::new(store),
        }
    }

    pub fn save(&self, star: &Star) -> Result<()> {
        self.records.save(&star.id, star)
    }

    pub fn get(&self, id: &str) -> Result<Star> {
        self.records.load(id)
    }
}

pub struct Comments {
    records: RecordStore,
}

impl Comments {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            records: RecordStore::new(store),
        }
    }

    pub fn save(&self, comment: &Comment) -> Result<()> {
        self.records.save(&comment.id, comment)
    }

    pub fn get(&self, id: &str) -> Result<Comment> {
        self.records.load(id)
    }
}

pub struct Privileges {
    records: RecordStore,
}

impl Privileges {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            records: RecordStore::new(store),
        }
    }

    pub fn save(&self, privilege: &Privilege) -> Result<()> {
        self.records.save(&privilege.id, privilege)
    }

    /// Loads one grant by identifier; the ACL check in the API layer resolves
    /// a team's access level through this.
    pub fn get(&self, id: &str) -> Result<Privilege> {
        self.records.load(id)
    }
}
