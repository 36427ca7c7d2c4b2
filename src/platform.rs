//! Platform glue
//!
//! Browser/native differences the core otherwise ignores. The fixed-rate
//! timer itself belongs to the embedding shell (setInterval/rAF on the web);
//! it feeds elapsed time into `game::TickDriver`.

/// Route `log` output to the browser console (WASM)
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Route `log` output through env_logger (native)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
