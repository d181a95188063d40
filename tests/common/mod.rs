//! Common test utilities and harness
//!
//! Provides reusable utilities for functional testing including:
//! - Isolated environments (temp working directory and HOME)
//! - Running the `process_shader` binary
//! - Assertion utilities for generated `.inc` files

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test environment with isolated working and config directories
pub struct TestEnvironment {
    /// Temporary directory holding shaders and outputs
    pub temp_dir: TempDir,
    /// Fake home directory so the user's real config is never read
    pub home_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home_dir = temp_dir.path().join("home");

        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");

        Self { temp_dir, home_dir }
    }

    /// Working directory for shader files
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a shader source file and return its path
    pub fn write_shader(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, content).expect("Failed to write test shader");
        path
    }

    /// Write ~/.config/shaderinc/config.toml inside the fake home
    pub fn write_config(&self, content: &str) {
        let config_dir = self.home_dir.join(".config").join("shaderinc");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config directory");
        std::fs::write(config_dir.join("config.toml"), content)
            .expect("Failed to write test config");
    }

    /// Run the binary with the given arguments inside the environment
    pub fn run<I, S>(&self, args: I) -> Output
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        Command::new(env!("CARGO_BIN_EXE_process_shader"))
            .args(args)
            .current_dir(self.dir())
            .env("HOME", &self.home_dir)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run process_shader")
    }

    /// Names of every `.inc` file in the working directory
    pub fn inc_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir())
            .expect("Failed to list temp directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".inc"))
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Stderr of a finished run as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert a generated file contains exactly these literal lines
pub fn assert_inc_eq(path: &Path, expected: &[&str]) {
    let content = std::fs::read_to_string(path).expect("Failed to read generated file");
    let actual: Vec<&str> = content.lines().collect();
    assert_eq!(
        actual, expected,
        "Generated file {:?} mismatch. Actual content: {:?}",
        path, content
    );
    assert!(content.ends_with('\n') || content.is_empty(), "Missing final newline");
}
