//! WASM entry point, mounted by the bundler into the root document.

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("mounting shimatabi app");
    leptos::mount::mount_to_body(App);
}
