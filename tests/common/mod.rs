pub mod fake_api;
pub mod stub_server;

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// An address nothing listens on, so API calls fail fast.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Helper struct to run boxoffice commands in an isolated temp directory
pub struct BoxOfficeTest {
    pub temp_dir: TempDir,
    binary_path: String,
    api_url: String,
}

#[allow(dead_code)]
impl BoxOfficeTest {
    pub fn new() -> Self {
        Self::with_api(UNREACHABLE_API)
    }

    /// Run against a specific ticketing service.
    pub fn with_api(api_url: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        BoxOfficeTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_boxoffice").to_string(),
            api_url: api_url.to_string(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("BOXOFFICE_ROOT")
            .env_remove("BOXOFFICE_LOG")
            .env("BOXOFFICE_API_URL", &self.api_url)
            .stdin(Stdio::null());
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute boxoffice command")
    }

    /// Run without the API URL override so the config file decides.
    pub fn run_with_config_url(&self, args: &[&str]) -> Output {
        self.command(args)
            .env_remove("BOXOFFICE_API_URL")
            .output()
            .expect("Failed to execute boxoffice command")
    }

    /// Run with `input` piped to stdin, as when scripting the shell.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn boxoffice command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for boxoffice command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("Invalid JSON from {args:?}: {e}\n{stdout}"))
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.temp_dir.path().join(".boxoffice");
        fs::create_dir_all(&dir).expect("Failed to create .boxoffice directory");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join(".boxoffice").join("config.yaml")).ok()
    }
}
