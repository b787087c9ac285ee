//! Test helpers for writing site catalogs into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use siting_core::test_support::sample_sites;
use tempfile::TempDir;

/// A temporary directory holding `catalog.json` with the sample sites.
pub(super) struct CatalogWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CatalogWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let payload = serde_json::to_vec_pretty(&sample_sites()).expect("serialise catalog");
        write_utf8(&root.join("catalog.json"), &payload);
        Self { _dir: dir, root }
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn parse_output(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("command output is JSON")
}
