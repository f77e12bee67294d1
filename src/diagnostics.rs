//! Shared diagnostics: stderr warnings and a uniform error-message prefix.

pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("mpforge: {}", msg.as_ref())
}

pub fn warn(msg: impl AsRef<str>) {
    eprintln!("mpforge warning: {}", msg.as_ref());
}
