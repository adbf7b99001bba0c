//! Custom cargo commands for sift.
//!
//! Usage:
//!   cargo xtask verify          - Tests, clippy and a CLI smoke run
//!   cargo xtask test            - Run all tests
//!   cargo xtask check           - Quick check (check + clippy)
//!   cargo xtask bench           - Run benchmarks
//!   cargo xtask fuzz <target>   - Run a fuzz target for 60 seconds
//!   cargo xtask demo <query>    - Search the demo knowledge base

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["search_queries", "approximate_matching"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("demo") => demo(&args.collect::<Vec<_>>().join(" "))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify            Run tests, clippy, and search the demo corpus
  test              Run all Rust tests (default and no-default features)
  check             Quick check (cargo check + clippy)
  bench             Run benchmarks
  fuzz <target>     Run a fuzz target for 60s (search_queries, approximate_matching)
  demo <query>      Search demos/knowledge_base.json
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sift verification suite");
    println!("==========================================\n");

    println!("[1/3] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[2/3] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/3] Searching the demo corpus...");
    demo("return policy")?;
    println!("✓ CLI smoke run passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    Ok(())
}

/// Tests with and without the optional features
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Fuzzing needs a nightly toolchain with cargo-fuzz installed
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target, expected one of {:?}", FUZZ_TARGETS);
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of {:?}", target, FUZZ_TARGETS);
    }
    run_cargo(&["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
}

fn demo(query: &str) -> Result<()> {
    let query = if query.trim().is_empty() { "return policy" } else { query };
    let corpus = project_root()?.join("demos/knowledge_base.json");
    let corpus = corpus
        .to_str()
        .context("demo corpus path is not valid UTF-8")?;
    run_cargo(&["run", "--quiet", "--", "search", corpus, query])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
