use std::sync::Arc;

use crate::error::Result;
use crate::store::{Kind, KvStore, NameIndex, RecordStore};
use crate::types::Tag;

/// TagManager persists individual tag records and their name index entries.
pub struct TagManager {
    records: RecordStore,
    index: NameIndex,
}

fn composite_key(namespace: &str, repository: &str, image_id: &str, tag_name: &str) -> String {
    format!("{namespace}:{repository}:{image_id}:{tag_name}")
}

impl TagManager {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            records: RecordStore::new(store.clone()),
            index: NameIndex::new(store),
        }
    }

    /// Looks up a tag's identifier under its 4-part composite key.
    pub fn has(
        &self,
        namespace: &str,
        repository: &str,
        image_id: &str,
        tag_name: &str,
    ) -> Result<Option<String>> {
        self.index.lookup(
            Kind::Tag,
            &composite_key(namespace, repository, image_id, tag_name),
        )
    }

    /// Upserts the snapshot and its name index entry. Tag identifiers embed
    /// the `namespace:repository:name` triple, so saving an existing triple
    /// overwrites the prior record in place.
    pub fn save(&self, tag: &Tag) -> Result<()> {
        self.records.save(&tag.id, tag)?;
        self.index.register(
            Kind::Tag,
            &composite_key(&tag.namespace, &tag.repository, &tag.image_id, &tag.name),
            &tag.id,
        )
    }

    /// Loads the snapshot for `id`, failing with `NotFound` when absent.
    pub fn get(&self, id: &str) -> Result<Tag> {
        self.records.load(id)
    }
}
