use std::fs;
use std::path::{Path, PathBuf};

use gtkw_parser::{classify_block, DeclarationBlock, GroupedSignals, ParseError};

pub struct TestHarness {
    fixtures_root: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            fixtures_root: default_fixtures_root(),
        }
    }

    #[allow(dead_code)]
    pub fn fixtures_root(&self) -> &Path {
        &self.fixtures_root
    }

    pub fn fixture_path(&self, relative: &str) -> PathBuf {
        self.fixtures_root.join(relative)
    }

    pub fn read_fixture(&self, relative: &str) -> String {
        let path = self.fixture_path(relative);
        fs::read_to_string(&path).unwrap_or_else(|err| {
            panic!("Failed to read fixture {}: {}", path.display(), err);
        })
    }

    pub fn locate_fixture(&self, relative: &str) -> Result<DeclarationBlock, ParseError> {
        DeclarationBlock::from_source(&self.read_fixture(relative))
    }

    #[allow(dead_code)]
    pub fn signals_of(&self, relative: &str) -> GroupedSignals {
        let block = self
            .locate_fixture(relative)
            .unwrap_or_else(|err| panic!("Failed to locate block in {}: {}", relative, err));
        classify_block(&block)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn default_fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test_files")
}

#[allow(dead_code)]
pub fn iter_verilog_files(relative_dir: &str) -> Vec<PathBuf> {
    let root = default_fixtures_root().join(relative_dir);
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|err| panic!("Failed to read directory {}: {}", root.display(), err))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("v") | Some("sv") => Some(path),
                _ => None,
            }
        })
        .collect();
    files.sort();
    files
}

/// Display strings of a group, for compact assertions.
#[allow(dead_code)]
pub fn names(group: &[gtkw_parser::SignalName]) -> Vec<String> {
    group.iter().map(ToString::to_string).collect()
}
