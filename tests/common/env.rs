//! Isolated environment for running the calc-console binary.
//!
//! Every run gets a fresh HOME and XDG config dir so a developer's own
//! config file never leaks into tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_calc-console")),
        }
    }

    /// Path of the config dir the binary will search
    pub fn config_dir(&self) -> PathBuf {
        let home = self.home_dir.path();
        if cfg!(target_os = "macos") {
            home.join("Library").join("Application Support")
        } else if cfg!(windows) {
            home.join("AppData").join("Roaming")
        } else {
            home.join(".config")
        }
    }

    /// Write `<config dir>/calc-console/config.toml`
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.config_dir().join("calc-console").join("config.toml");
        self.write_file(&path, content);
        path
    }

    /// Write an arbitrary file under the temp home
    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(relative);
        self.write_file(&path, content);
        path
    }

    fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Run with `lines` joined by newlines on stdin.
    pub fn run(&self, args: &[&str], lines: &[&str]) -> TestResult {
        self.run_with_env(args, lines, &[])
    }

    pub fn run_with_env(
        &self,
        args: &[&str],
        lines: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut stdin = lines.join("\n");
        if !lines.is_empty() {
            stdin.push('\n');
        }
        self.run_raw(args, &stdin, env_vars)
    }

    /// Run with exact stdin bytes.
    pub fn run_raw(
        &self,
        args: &[&str],
        stdin: impl AsRef<[u8]>,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut child = self.spawn(args, env_vars);
        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            pipe.write_all(stdin.as_ref())
                .expect("Failed to write stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait on calc-console");

        output_to_result(output)
    }

    /// Start the binary with all three streams piped and leave it running.
    pub fn spawn(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Child {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_dir())
            .env("APPDATA", self.config_dir())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CALC_MAX_RETRIES")
            .env_remove("CALC_COLOR")
            .env_remove("CALC_SHOW_MENU")
            .env_remove("CALC_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        cmd.spawn().expect("Failed to execute calc-console")
    }
}

pub fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
