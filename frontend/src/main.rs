use crate::elements::app_login::app_shell;

mod client;
mod connect_fetch;
mod connect_realtime;
mod constants;
mod elements;
mod loader;
mod state;
mod types;
mod utils;

pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    dominator::append_dom(&dominator::body(), app_shell());
}
