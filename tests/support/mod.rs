use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn blob_path(&self) -> PathBuf {
        self.dir.path().join("todos.json")
    }

    pub fn read_blob(&self) -> Option<String> {
        fs::read_to_string(self.blob_path()).ok()
    }

    pub fn write_blob(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.blob_path(), contents)
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.dir.path().join("config.toml"), contents)
    }
}

pub fn td_cmd(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("td").expect("binary");
    cmd.env("TD_DATA_DIR", home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}
