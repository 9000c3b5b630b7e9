use std::env;
use std::process::Command;

const VERSION_VAR: &str = "SCHEDULE_GRID_VERSION";

/// Version reported by `schedule-grid --version`.
///
/// An explicit release stamp wins, then the nearest git tag, then the crate
/// version with a `-dev` suffix.
fn version_stamp() -> String {
    if let Some(stamp) = env::var(VERSION_VAR).ok().filter(|s| !s.trim().is_empty()) {
        return stamp.trim().to_string();
    }
    git_describe().unwrap_or_else(|| {
        let pkg = env::var("CARGO_PKG_VERSION").unwrap_or_default();
        format!("{pkg}-dev")
    })
}

fn git_describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;
    let text = String::from_utf8(out.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    println!("cargo:rustc-env={}={}", VERSION_VAR, version_stamp());
    println!("cargo:rerun-if-env-changed={}", VERSION_VAR);
    println!("cargo:rerun-if-changed=build.rs");
}
