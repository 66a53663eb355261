pub mod calc;
pub mod config;
pub mod site;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
