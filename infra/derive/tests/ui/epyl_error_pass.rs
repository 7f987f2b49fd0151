use epyl_derive::epyl_error;
use std::borrow::Cow;

#[epyl_error]
pub enum DemoError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, DemoError> {
    let text = std::fs::read_to_string("/definitely/not/here").context("Reading fixture")?;
    Ok(text)
}

fn main() {
    let err = read_missing().expect_err("file must be missing");
    assert!(err.to_string().starts_with("I/O error (Reading fixture)"));

    let internal: DemoError = "boom".into();
    let internal = Err::<(), _>(internal).context("while testing").expect_err("is an error");
    assert_eq!(internal.to_string(), "Internal error (while testing): boom");
}
