#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the EPYL workspace.
//!
//! Currently a single attribute, [`macro@epyl_error`], which turns a plain enum into
//! a `thiserror` error type with context support. Library crates (`epyl-kernel`,
//! `epyl-logger`, `epyl-export`) declare their error enums with it so every error
//! in the workspace formats and chains the same way.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: adds `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: generates a companion `<Name>Ext` trait whose `.context(..)` fills the
///   `context` field of the error, both on `Result<T, Name>` and on `Result<T, Source>`
///   for every variant that wraps a source error.
/// * **Conversions**: `From<Source>` for every variant with a `source` field (or a field
///   marked `#[source]` / `#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **`format_context`**: a module-local helper rendering `" (context)"` or `""`, meant
///   for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use epyl_derive::epyl_error;
/// use std::borrow::Cow;
///
/// #[epyl_error]
/// pub enum ExportError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal export error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn write(path: &std::path::Path, html: &str) -> Result<(), ExportError> {
///     std::fs::write(path, html).context("Writing index.html")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn epyl_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
