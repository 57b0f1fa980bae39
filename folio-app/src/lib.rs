//! Folio application library
//!
//! This crate contains the desktop portfolio's library surfaces used by the
//! executable in `src/main.rs`. Modules here are application glue: page
//! state, the reveal and carousel controllers, and the section views.
//!
//! Notes
//! - Most consumers should use the `folio-app` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod image_cache;
pub mod layout;
pub mod message;
pub mod reveal;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod transitions;
pub mod update;
pub mod view;
pub mod views;
