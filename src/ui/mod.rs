pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod icons;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
pub mod viewer;
pub mod wrap;

pub use runtime::run;
