//! Build script: stamp the binary with a release version.
//!
//! `CURSOR_RULES_VERSION` from the environment wins; otherwise `git describe`
//! supplies one when building from a checkout. With neither, nothing is
//! emitted and `cursor_rules_cli::VERSION` falls back to the crate version.
use std::path::Path;
use std::process::Command;

const VERSION_VAR: &str = "CURSOR_RULES_VERSION";

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8(output.stdout).ok()?.trim().to_owned();
    (!version.is_empty()).then_some(version)
}

fn main() {
    println!("cargo:rerun-if-env-changed={VERSION_VAR}");

    let version = std::env::var(VERSION_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(git_describe);
    if let Some(version) = version {
        println!("cargo:rustc-env={VERSION_VAR}={version}");
    }

    if Path::new(".git").exists() {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/tags");
    }
}
