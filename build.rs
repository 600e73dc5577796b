//! Build script for kommit.

use std::{io, process::Command};

fn main() {
    define_version_with_git();
}

/// Defines `VERSION_WITH_GIT`, the cargo version with the Git revision.
///
/// The revision is appended as build metadata unless the worktree is clean and
/// checked out at the tag `v{cargo_version}`. When Git is not available, only
/// the cargo version is used.
///
/// For instance:
///
/// * Cargo version 0.1.0 on tag v0.1.0, clean state => `0.1.0`
/// * Cargo version 0.1.0 on tag v0.1.0, dirty state =>
///   `0.1.0+abcd1234-modified`
/// * Cargo version 0.2.0-dev on any commit, clean state => `0.2.0-dev+abcd1234`
fn define_version_with_git() {
    let cargo_version = env!("CARGO_PKG_VERSION");
    let version = version_with_git(cargo_version)
        .unwrap_or_else(|_| String::from(cargo_version));

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=VERSION_WITH_GIT={version}");
}

fn version_with_git(cargo_version: &str) -> io::Result<String> {
    let described = git(&["describe", "--always", "--dirty=-modified"])?;

    if described == format!("v{cargo_version}") {
        return Ok(String::from(cargo_version));
    }

    let revision = git(&["rev-parse", "--short", "HEAD"])?;
    if revision.is_empty() {
        return Ok(String::from(cargo_version));
    }

    let dirty = !git(&["status", "--porcelain"])?.is_empty();
    let state = if dirty { "-modified" } else { "" };

    Ok(format!("{cargo_version}+{revision}{state}"))
}

fn git(args: &[&str]) -> io::Result<String> {
    let output = Command::new("git").args(args).output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
