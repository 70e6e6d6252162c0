//! Build command - bundles the site for production.
//!
//! The heavy lifting is the bundler's; this wraps it, copies static assets
//! through, and verifies the output is servable.

use std::{path::Path, process::Command, time::Instant};

use color_eyre::eyre::{Result, WrapErr, eyre};
use shimatabi_core::Config;

use crate::assets;

/// Run the build command.
pub fn run(config_path: &Path, release: bool) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, release, "Starting build");

    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    let dist_dir = Path::new(&config.build.dist_dir);
    let public_dir = Path::new(&config.build.public_dir);

    run_bundler(release)?;

    let copied = assets::copy_through(public_dir, dist_dir).wrap_err("Failed to copy static assets")?;

    verify_output(dist_dir)?;

    let total_bytes = dist_size(dist_dir);
    let duration = start.elapsed();

    println!();
    println!("  ✅ 构建完成!");
    println!();
    println!("  Assets:     {copied}");
    println!("  📦 总大小:  {:.2} KB", total_bytes as f64 / 1024.0);
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", dist_dir.display());
    println!();

    tracing::info!(copied, total_bytes, ?duration, "Build completed successfully");

    Ok(())
}

/// Invoke the bundler. All bundling options (entry document, style
/// preprocessing, output directory) live in `Trunk.toml`.
pub(crate) fn run_bundler(release: bool) -> Result<()> {
    let mut command = Command::new("trunk");
    command.arg("build");
    if release {
        command.arg("--release");
    }

    tracing::debug!(?command, "invoking bundler");

    let status = command
        .status()
        .wrap_err("Failed to run trunk; is it installed?")?;
    if !status.success() {
        return Err(eyre!("bundler exited with {status}"));
    }
    Ok(())
}

/// Check that the bundler produced a servable site.
pub(crate) fn verify_output(dist_dir: &Path) -> Result<()> {
    if !dist_dir.is_dir() {
        return Err(eyre!(
            "output directory {} does not exist; build may have failed",
            dist_dir.display()
        ));
    }

    let index = dist_dir.join("index.html");
    if !index.is_file() {
        return Err(eyre!("{} does not exist", index.display()));
    }

    Ok(())
}

/// Total size of the output directory in bytes.
fn dist_size(dist_dir: &Path) -> u64 {
    walkdir::WalkDir::new(dist_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_verify_output_missing_dir() {
        let err = verify_output(Path::new("no-such-dist")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_verify_output_missing_index() {
        let dist = TempDir::new().unwrap();
        let err = verify_output(dist.path()).unwrap_err();
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn test_verify_output_ok() {
        let dist = TempDir::new().unwrap();
        fs::write(dist.path().join("index.html"), "<html></html>").unwrap();
        assert!(verify_output(dist.path()).is_ok());
    }

    #[test]
    fn test_dist_size_sums_files() {
        let dist = TempDir::new().unwrap();
        fs::write(dist.path().join("a.bin"), [0u8; 100]).unwrap();
        fs::create_dir(dist.path().join("sub")).unwrap();
        fs::write(dist.path().join("sub/b.bin"), [0u8; 24]).unwrap();

        assert_eq!(dist_size(dist.path()), 124);
    }
}
