//! Deploy command - production build plus artifact verification.
//!
//! Publication itself happens through GitHub Pages; this produces the
//! artifacts and tells the operator what remains to check.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use shimatabi_core::Config;

use super::build;

/// Run the deploy command.
pub fn run(config_path: &Path) -> Result<()> {
    println!("🚀 开始部署到 GitHub Pages...");

    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;

    println!("📦 构建项目...");
    build::run(config_path, true)?;

    let dist_dir = Path::new(&config.build.dist_dir);
    build::verify_output(dist_dir).wrap_err("构建产物校验失败")?;

    println!("✅ 构建完成，文件已准备就绪");
    println!("📝 请确保：");
    println!("   1. 已推送代码到GitHub");
    println!("   2. 在GitHub仓库设置中启用了GitHub Pages");
    println!("   3. 设置了正确的分支和目录");
    println!("   4. GitHub Actions工作流已配置");

    if let Some(url) = &config.deploy.pages_url {
        println!();
        println!("🌐 部署地址: {url}");
    }

    tracing::info!(dist = %dist_dir.display(), "Deploy artifacts ready");

    Ok(())
}
