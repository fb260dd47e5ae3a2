pub const SCHEMA: &str = r#"
-- Flat byte-keyed records (full entity snapshots)
CREATE TABLE IF NOT EXISTS kv (
    key BLOB PRIMARY KEY,
    value BLOB NOT NULL
);

-- Named hash tables (name indexes and their tombstones)
CREATE TABLE IF NOT EXISTS kv_hash (
    tbl TEXT NOT NULL,
    field BLOB NOT NULL,
    value BLOB NOT NULL,
    PRIMARY KEY (tbl, field)
);
"#;
