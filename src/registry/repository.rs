use std::sync::Arc;

use chrono::Utc;

use super::{ImageIndex, KeyLocks, TagManager};
use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::mint;
use crate::store::{Kind, KvStore, NameIndex, RecordStore};
use crate::types::{Repository, Tag};

/// RepositoryManager orchestrates repository state: manifest pushes, tag
/// attachment, upload completion, and removal from name-based discovery.
///
/// Every mutating operation holds the natural key's lock across the whole
/// resolve-mutate-save sequence, so concurrent callers in this process
/// serialize per repository. Operations against the store itself remain
/// individual round trips with no multi-key transaction; the failure modes
/// that opens are documented on each operation.
pub struct RepositoryManager {
    records: RecordStore,
    index: NameIndex,
    tags: TagManager,
    images: Arc<dyn ImageIndex>,
    locks: KeyLocks,
    dedupe_tags: bool,
}

fn natural_key(namespace: &str, name: &str) -> String {
    format!("{namespace}:{name}")
}

impl RepositoryManager {
    pub fn new(
        store: Arc<dyn KvStore>,
        images: Arc<dyn ImageIndex>,
        config: &RegistryConfig,
    ) -> Self {
        Self {
            records: RecordStore::new(store.clone()),
            index: NameIndex::new(store.clone()),
            tags: TagManager::new(store),
            images,
            locks: KeyLocks::new(),
            dedupe_tags: config.dedupe_tags,
        }
    }

    /// Resolves `namespace/name` through the name index; when registered,
    /// loads and returns the snapshot with its identifier.
    pub fn has(&self, namespace: &str, name: &str) -> Result<Option<(String, Repository)>> {
        let key = natural_key(namespace, name);
        let Some(id) = self.index.lookup(Kind::Repository, &key)? else {
            return Ok(None);
        };
        let repo: Repository = self.records.load(&id)?;
        Ok(Some((id, repo)))
    }

    /// Creates or replaces the repository's manifest. First push for an
    /// unseen `(namespace, name)` mints the identifier from the natural key
    /// and stamps `created_at`; every push rewrites `manifest`, `agent`, and
    /// `updated_at`, and resets both completion flags. Returns the
    /// repository's identifier.
    pub fn put(&self, namespace: &str, name: &str, manifest: &str, agent: &str) -> Result<String> {
        let key = natural_key(namespace, name);
        let slot = self.locks.slot(&key);
        let _guard = slot.lock().unwrap_or_else(|e| e.into_inner());

        let now = Utc::now();
        let mut repo = match self.has(namespace, name)? {
            Some((_, repo)) => repo,
            None => Repository::new(mint::id(Kind::Repository, &key), namespace, name, now),
        };

        repo.namespace = namespace.to_string();
        repo.name = name.to_string();
        repo.manifest = manifest.to_string();
        repo.agent = agent.to_string();
        repo.updated_at = now;

        // A manifest push invalidates any previously completed upload.
        repo.uploaded = false;
        repo.checksummed = false;

        self.save(&repo)?;
        Ok(repo.id)
    }

    /// Points `tag_name` at `image_id`. The tag record is an upsert keyed by
    /// the `namespace:name:tag_name` triple, so re-tagging a name overwrites
    /// the previous pointer in place.
    ///
    /// By default the repository's tag list gets a new entry on every push,
    /// including re-pushes of an existing name, leaving duplicate entries for
    /// one logical tag; `RegistryConfig::dedupe_tags` switches the list to
    /// one entry per name.
    ///
    /// Fails before any write when the repository or the referenced image is
    /// unknown. The tag save and the repository save are separate round
    /// trips with no rollback: if the second fails, the tag record exists but
    /// the repository's list does not reflect it yet.
    pub fn put_tag(
        &self,
        image_id: &str,
        namespace: &str,
        name: &str,
        tag_name: &str,
    ) -> Result<()> {
        let key = natural_key(namespace, name);
        let slot = self.locks.slot(&key);
        let _guard = slot.lock().unwrap_or_else(|e| e.into_inner());

        let Some((_, mut repo)) = self.has(namespace, name)? else {
            return Err(Error::RepositoryNotFound);
        };
        if !self.images.has(image_id)? {
            return Err(Error::ImageNotFound(image_id.to_string()));
        }

        let tag = Tag {
            id: format!("{namespace}:{name}:{tag_name}"),
            name: tag_name.to_string(),
            image_id: image_id.to_string(),
            namespace: namespace.to_string(),
            repository: name.to_string(),
            sign: None,
        };
        self.tags.save(&tag)?;

        if self.dedupe_tags {
            repo.tags.retain(|existing| existing != &tag.id);
        } else if repo.tags.contains(&tag.id) {
            tracing::debug!("tag {} re-pushed, keeping duplicate list entry", tag.id);
        }
        repo.tags.push(tag.id);

        self.save(&repo)
    }

    /// Marks the image upload for this repository as complete and persists
    /// the snapshot.
    pub fn put_images(&self, namespace: &str, name: &str) -> Result<()> {
        let key = natural_key(namespace, name);
        let slot = self.locks.slot(&key);
        let _guard = slot.lock().unwrap_or_else(|e| e.into_inner());

        let Some((_, mut repo)) = self.has(namespace, name)? else {
            return Err(Error::RepositoryNotFound);
        };

        repo.uploaded = true;
        repo.checksummed = true;
        repo.updated_at = Utc::now();

        self.save(&repo)
    }

    /// Retracts the repository from name-based discovery. The primary
    /// snapshot and all child tag/star/comment records are retained and stay
    /// reachable by identifier; only the name index entry moves to its
    /// tombstone table.
    pub fn remove(&self, namespace: &str, name: &str) -> Result<()> {
        let key = natural_key(namespace, name);
        let slot = self.locks.slot(&key);
        let _guard = slot.lock().unwrap_or_else(|e| e.into_inner());

        if !self.index.retract(Kind::Repository, &key)? {
            return Err(Error::RepositoryNotFound);
        }
        tracing::info!("repository {namespace}/{name} retracted from the name index");
        Ok(())
    }

    /// Persists the snapshot, then re-registers the name index entry. No
    /// rollback: a failure after the first write leaves the record saved
    /// under a stale or missing index entry.
    fn save(&self, repo: &Repository) -> Result<()> {
        self.records.save(&repo.id, repo)?;
        self.index.register(
            Kind::Repository,
            &natural_key(&repo.namespace, &repo.name),
            &repo.id,
        )
    }
}
