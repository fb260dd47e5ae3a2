use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub data_dir: PathBuf,
    /// When true, pushing a tag whose name already exists in a repository
    /// replaces the existing entry in the repository's tag list instead of
    /// appending a duplicate. Defaults to false, which matches the historical
    /// duplicate-append behavior.
    pub dedupe_tags: bool,
}

impl RegistryConfig {
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("berth.db")
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            dedupe_tags: false,
        }
    }
}
