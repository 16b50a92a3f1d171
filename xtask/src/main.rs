//! Custom cargo commands for method-contracts.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests under both backends
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Environment variable read by `Config::from_env`.
const BACKEND_ENV: &str = "METHOD_CONTRACTS_BACKEND";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + message table + both backends + release + clippy)
  test      Run all tests under the development and deployment backends
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Method Contracts Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Checking diagnostic message table...");
    verify_message_table()?;
    println!("✓ Every category is documented\n");

    println!("[3/5] Running tests under both backends...");
    test()?;
    println!("✓ All tests passed under both backends\n");

    println!("[4/5] Running tests in release mode...");
    run_cargo(&["test", "--quiet", "--release"], None)?;
    println!("✓ Release tests passed\n");

    println!("[5/5] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--all-targets", "--quiet", "--", "-D", "warnings"], None)?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run the workspace tests once per backend.
fn test() -> Result<()> {
    for backend in ["development", "deployment"] {
        println!("  {}={}", BACKEND_ENV, backend);
        run_cargo(&["test", "--workspace", "--quiet"], Some(backend))?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--workspace", "--quiet"], None)?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"], None)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], None)
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

fn run_cargo(args: &[&str], backend: Option<&str>) -> Result<()> {
    let root = project_root()?;

    let mut command = Command::new("cargo");
    command.args(args).current_dir(&root);
    if let Some(backend) = backend {
        command.env(BACKEND_ENV, backend);
    }

    let status = command
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 4 {
        bail!(
            "Expected at least 4 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// Every `Category` variant must have a row in the message table at the top
/// of `diagnostic.rs`, since downstream tests compare those strings.
fn verify_message_table() -> Result<()> {
    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/diagnostic.rs"))
        .context("Failed to read diagnostic.rs")?;

    let variants = category_variants(&source);
    if variants.is_empty() {
        bail!("No Category variants found in diagnostic.rs");
    }

    let table: Vec<&str> = source
        .lines()
        .filter(|line| line.starts_with("//! | `"))
        .collect();

    let missing: Vec<&str> = variants
        .iter()
        .filter(|variant| {
            let cell = format!("| `{}`", variant);
            !table.iter().any(|row| row.contains(&cell))
        })
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        bail!("Categories missing from the message table: {}", missing.join(", "));
    }

    Ok(())
}

fn category_variants(source: &str) -> Vec<String> {
    let mut variants = Vec::new();
    let mut in_enum = false;

    for line in source.lines() {
        if line.starts_with("pub enum Category") {
            in_enum = true;
            continue;
        }
        if !in_enum {
            continue;
        }
        if line == "}" {
            break;
        }
        // Variants sit at exactly one level of indentation.
        let Some(rest) = line.strip_prefix("    ") else {
            continue;
        };
        if rest.starts_with(char::is_uppercase) {
            let name: String = rest.chars().take_while(|c| c.is_alphanumeric()).collect();
            variants.push(name);
        }
    }

    variants
}
