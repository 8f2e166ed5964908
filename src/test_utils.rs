//! Test utilities shared across the codebase

use std::path::PathBuf;

/// Root directory of this crate
pub fn get_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the sample documentation export used by the tests
pub fn get_sample_docs_path() -> PathBuf {
    get_project_root().join("testdata").join("MyLib.xml")
}
