use std::borrow::Cow;

/// Errors raised while writing the static site.
#[epyl_derive::epyl_error]
pub enum ExportError {
    /// Creating the output directory or writing a file failed.
    #[error("Export I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid export configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
