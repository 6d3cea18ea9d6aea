//! Temporary workspace for integration tests.

use std::path::PathBuf;

use region_fill::Canvas;
use tempfile::TempDir;

use tilefill::rendering::{read_png, write_png};

/// A temporary directory holding input images, outputs and configs
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of a file inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a canvas as PNG and return its path
    pub fn write_image(&self, name: &str, canvas: &Canvas) -> PathBuf {
        let path = self.path(name);
        write_png(&path, canvas).expect("Failed to write test image");
        path
    }

    /// Read a PNG written by a test
    pub fn read_image(&self, name: &str) -> Canvas {
        read_png(&self.path(name)).expect("Failed to read output image")
    }

    /// Write a YAML config and return its path
    pub fn write_config(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}
