use std::path::PathBuf;

use tempfile::TempDir;

/// Test context holding an isolated temporary directory.
///
/// The directory and everything in it is removed when the context is dropped,
/// so keep the context alive for as long as the test touches `config_path`.
pub struct TestContext {
    /// Temporary directory owning all files created by the test.
    pub dir: TempDir,

    /// Location of the welcome config file inside `dir`.
    ///
    /// The file only exists if the builder was given seed content.
    pub config_path: PathBuf,
}

impl TestContext {
    /// Path of a file named `name` inside the temporary directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
