#[path = "../helpers/mod.rs"]
mod helpers;

mod config_loading;
