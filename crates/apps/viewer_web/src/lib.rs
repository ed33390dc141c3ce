//! Browser application for the synchronized style-comparison grid.
//!
//! Binds the `mapbox-gl` browser global behind the [`engine::MapEngine`]
//! trait, builds one card per catalog entry, and routes engine events
//! into [`panels::PanelGrid`]. Compiled for wasm32 only; on other
//! targets this crate is empty.

#[cfg(target_arch = "wasm32")]
mod adapter;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod mapbox;

#[cfg(target_arch = "wasm32")]
pub use adapter::MapboxMap;
