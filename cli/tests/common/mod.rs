#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// An isolated data directory plus helpers to drive the binary against it.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_postalbro"));
        cmd.env("POSTALBRO_HOME", self.dir.path())
            .env_remove("POSTALBRO_LOG")
            .stdin(Stdio::null());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let output = self
            .cmd()
            .args(args)
            .output()
            .expect("Failed to execute postalbro binary");
        println!("ARGS: {args:?}");
        println!("STDOUT:\n{}", stdout(&output));
        println!("STDERR:\n{}", stderr(&output));
        output
    }

    /// Run with `input` written to stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .cmd()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn postalbro binary");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for postalbro");
        println!("STDOUT:\n{}", stdout(&output));
        println!("STDERR:\n{}", stderr(&output));
        output
    }

    pub fn saved(&self) -> Value {
        self.read_json("db.json")
    }

    pub fn recent(&self) -> Value {
        self.read_json("recent.json")
    }

    pub fn saved_apis(&self) -> Vec<Value> {
        self.saved()["apis"].as_array().cloned().unwrap_or_default()
    }

    pub fn recent_apis(&self) -> Vec<Value> {
        self.recent()["apis"].as_array().cloned().unwrap_or_default()
    }

    fn read_json(&self, name: &str) -> Value {
        let content = fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {name}: {e}"));
        serde_json::from_str(&content).unwrap_or_else(|e| panic!("Invalid JSON in {name}: {e}"))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got {:?}. stderr: {}",
        output.status.code(),
        stderr(output)
    );
}

pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// URL on a local port nothing listens on.
pub fn unreachable_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}{path}")
}
