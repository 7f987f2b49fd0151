//! Kernel utilities shared by the native tools (`epyl-export`, `epyl-server`).
//! Keep this crate lightweight; the browser build only needs [`domain`].
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use epyl_kernel::config::load_site_config;
//! use std::path::Path;
//!
//! let cfg = load_site_config(Some(Path::new("config/epyl.toml"))).unwrap_or_default();
//! assert_eq!(cfg.site.name, "EPYL");
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use epyl_domain as domain;
