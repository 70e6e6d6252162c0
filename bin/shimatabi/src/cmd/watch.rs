//! Watch command - development server with live reload.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher, event::ModifyKind};
use shimatabi_core::Config;
use tokio::{net::TcpListener, sync::mpsc};

use super::build::run_bundler;
use crate::{
    assets,
    server::{LIVERELOAD_SCRIPT, ServerState, create_router},
};

/// Debounce interval for file changes.
const DEBOUNCE_MS: u64 = 200;

/// Directories (and the entry document) whose changes trigger a rebuild.
const WATCH_PATHS: [&str; 6] = [
    "app/src",
    "crates",
    "frontend/src",
    "style",
    "public",
    "index.html",
];

/// Run the watch command.
///
/// Starts a development server with live reload support.
pub async fn run(config_path: &Path, port: Option<u16>, open_browser: bool) -> Result<()> {
    tracing::info!(?config_path, ?port, "Starting watch mode");

    let config = Config::load(config_path).wrap_err("Failed to load configuration")?;
    let port = port.unwrap_or(config.serve.port);
    let dist_dir = PathBuf::from(&config.build.dist_dir);

    // Initial build
    println!();
    println!("  初次构建中...");
    rebuild(&config)?;
    println!("  ✓ 初次构建完成");

    // Create server state
    let state = Arc::new(ServerState::new());

    // Setup file watcher
    let (tx, mut rx) = mpsc::channel::<()>(16);
    let watcher_tx = tx.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Only trigger on write/modify events
                if matches!(
                    event.kind,
                    EventKind::Modify(ModifyKind::Data(_))
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                ) {
                    let _ = watcher_tx.blocking_send(());
                }
            }
        },
        notify::Config::default(),
    )
    .wrap_err("Failed to create file watcher")?;

    for dir in WATCH_PATHS {
        let path = Path::new(dir);
        if path.exists() {
            watcher
                .watch(path, RecursiveMode::Recursive)
                .wrap_err_with(|| format!("Failed to watch {dir}"))?;
            tracing::debug!(dir, "watching");
        }
    }

    // Start rebuild task
    let rebuild_state = state.clone();
    let rebuild_config = config.clone();

    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            settle(&mut rx).await;

            println!();
            println!("  检测到文件变化，重新构建...");

            match rebuild(&rebuild_config) {
                Ok(()) => {
                    println!("  ✓ 重新构建完成");
                    rebuild_state.notify_reload();
                }
                Err(e) => {
                    tracing::error!("Rebuild failed: {e}");
                    eprintln!("  ✗ 构建失败: {e}");
                }
            }
        }
    });

    // Start server
    let app = create_router(&dist_dir, state);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  🌐 开发服务器运行在 http://{addr}");
    println!("  📝 按 Ctrl+C 停止服务器");
    println!();

    if open_browser {
        let _ = open::that(format!("http://{addr}"));
    }

    // Keep watcher alive
    let _watcher = watcher;

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

/// Let a burst of change events settle, then drain everything it queued,
/// so one save produces one rebuild and the last event in a burst is never
/// dropped.
async fn settle(rx: &mut mpsc::Receiver<()>) {
    tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
    while rx.try_recv().is_ok() {}
}

/// Development rebuild: bundle without optimizations, copy assets through,
/// and inject the livereload script into the root document.
fn rebuild(config: &Config) -> Result<()> {
    run_bundler(false)?;

    let dist_dir = Path::new(&config.build.dist_dir);
    assets::copy_through(Path::new(&config.build.public_dir), dist_dir)
        .wrap_err("Failed to copy static assets")?;

    inject_livereload(dist_dir)?;
    Ok(())
}

/// Inject the livereload script into the root document.
fn inject_livereload(dist_dir: &Path) -> Result<()> {
    let index = dist_dir.join("index.html");
    let content = fs::read_to_string(&index)
        .wrap_err_with(|| format!("Failed to read {}", index.display()))?;

    // Only inject if not already present
    if !content.contains("__livereload") {
        let modified = content.replace("</body>", &format!("{LIVERELOAD_SCRIPT}</body>"));
        fs::write(&index, modified)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_inject_livereload_once() {
        let dist = TempDir::new().unwrap();
        let index = dist.path().join("index.html");
        fs::write(&index, "<html><body></body></html>").unwrap();

        inject_livereload(dist.path()).unwrap();
        let first = fs::read_to_string(&index).unwrap();
        assert!(first.contains("__livereload"));

        // A second pass must not duplicate the script.
        inject_livereload(dist.path()).unwrap();
        let second = fs::read_to_string(&index).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inject_livereload_missing_index() {
        let dist = TempDir::new().unwrap();
        assert!(inject_livereload(dist.path()).is_err());
    }

    #[tokio::test]
    async fn test_settle_folds_burst_into_one_rebuild() {
        let (tx, mut rx) = mpsc::channel::<()>(16);

        // A burst of saves lands before and during the settle window.
        for _ in 0..5 {
            tx.send(()).await.unwrap();
        }
        assert!(rx.recv().await.is_some());
        settle(&mut rx).await;

        // The whole burst was folded into this rebuild; nothing is pending.
        assert!(rx.try_recv().is_err());

        // A save after the drain still wakes the loop for another rebuild.
        tx.send(()).await.unwrap();
        assert!(rx.recv().await.is_some());
    }
}
