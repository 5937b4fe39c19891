//! Shopping List Frontend Entry Point

mod app;
mod catalog;
mod components;
mod confetti;
mod form;
mod list;
mod models;
mod notifier;
mod session;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

const LOG_LEVEL: LevelFilter = LevelFilter::Debug;
/// Recent log lines kept in memory
const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(LOG_LEVEL, LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }
    log::info!("[APP] mounting");
    mount_to_body(App);
}
