use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = rustc_version(&rustc).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=MATH_REFS_RUSTC_VERSION={version}");
}

// Returns `None` if rustc is not available.
fn rustc_version(rustc: &str) -> Option<String> {
    Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
}
