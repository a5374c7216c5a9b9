pub mod animator;
pub mod config;
pub mod frame_driver;
pub mod games;
pub mod layout;
pub mod lifecycle;
pub mod motion;
pub mod navigation;
pub mod random;
pub mod roster;
pub mod ui;

pub use config::Config;
