#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod mount;
pub mod notification;
pub mod profile;
pub mod response;
pub mod session;
pub mod storage;
pub mod util;

#[cfg(target_family = "wasm")]
fn main() {
	console_error_panic_hook::set_once();
	let level = match cfg!(debug_assertions) {
		true => log::Level::Debug,
		false => log::Level::Info,
	};
	if let Err(err) = console_log::init_with_level(level) {
		web_sys::console::error_1(&format!("logging unavailable: {err}").into());
	}
	mount::mount_all();
}

#[cfg(not(target_family = "wasm"))]
fn main() {}
