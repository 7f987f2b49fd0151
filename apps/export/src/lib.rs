//! # EPYL static export
//!
//! Server-side renders the landing page with the given [`SiteConfig`] and writes a
//! self-contained `index.html` (stylesheet inlined) next to the placeholder image.
//!
//! ```no_run
//! use epyl_kernel::domain::config::SiteConfig;
//!
//! let index = epyl_export::export(&SiteConfig::default())?;
//! println!("wrote {}", index.display());
//! # Ok::<(), epyl_export::ExportError>(())
//! ```

mod error;

pub use error::{ExportError, ExportErrorExt};

use dioxus::prelude::VirtualDom;
use epyl_kernel::domain::config::SiteConfig;
use epyl_kernel::domain::constants::MOUNT_ID;
use epyl_ui::{Page, PageProps, PLACEHOLDER_SVG, STYLESHEET};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// File name the page's images point at.
pub const PLACEHOLDER_FILE: &str = "placeholder.svg";

/// Renders the page body (everything under the mount point).
#[must_use]
pub fn render_body(config: &SiteConfig) -> String {
    let mut dom =
        VirtualDom::new_with_props(Page, PageProps::builder().config(config.clone()).build());
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

/// Renders the complete HTML document.
#[must_use]
pub fn render_document(config: &SiteConfig) -> String {
    let body = render_body(config);
    let lang = escape(&config.site.lang);
    let title = escape(&config.site.title);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         <div id=\"{MOUNT_ID}\">{body}</div>\n\
         </body>\n\
         </html>\n"
    )
}

/// Writes the document and the placeholder image into `config.export.out_dir`.
///
/// Returns the path of the written document.
///
/// # Errors
/// Returns [`ExportError::InvalidConfiguration`] if the document file name is not a
/// plain file name, or [`ExportError::Io`] if the directory or a file cannot be written.
pub fn export(config: &SiteConfig) -> Result<PathBuf, ExportError> {
    let out_dir = &config.export.out_dir;
    let file_name = validate_file_name(&config.export.file_name)?;

    fs::create_dir_all(out_dir)
        .context(format!("Creating output directory {}", out_dir.display()))?;

    let index = out_dir.join(file_name);
    let document = render_document(config);
    fs::write(&index, &document).context(format!("Writing {}", index.display()))?;
    debug!(path = %index.display(), bytes = document.len(), "Page written");

    let placeholder = out_dir.join(PLACEHOLDER_FILE);
    fs::write(&placeholder, PLACEHOLDER_SVG)
        .context(format!("Writing {}", placeholder.display()))?;

    info!(out_dir = %out_dir.display(), "Static site exported");
    Ok(index)
}

fn validate_file_name(name: &str) -> Result<&str, ExportError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(ExportError::InvalidConfiguration {
            message: format!("`{name}` is not a plain file name").into(),
            context: Some("export.file_name".into()),
        }),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
