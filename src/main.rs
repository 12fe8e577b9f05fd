use proposal_portal::app::App;
use proposal_portal::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Proposal Portal starting (backend {})", CONFIG.backend_url);

    yew::Renderer::<App>::new().render();
}
