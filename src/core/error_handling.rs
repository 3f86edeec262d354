//! Generic error reporting helpers
//!
//! Errors that reach the top of the process are split into two kinds: ones the
//! user can fix (bad plugin folder, bad config value) and system failures. The
//! first kind is logged with its own message, the second with the operation
//! context and the details at debug level.

/// Errors that know whether their message is fit for an end user
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// True if the message tells the user what to fix
    fn is_user_actionable(&self) -> bool;

    /// The message to show when the error is user actionable
    fn user_message(&self) -> Option<&str>;
}

/// Log an error as fatal, with detail scaled to who can act on it
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message().filter(|_| error.is_user_actionable()) {
        Some(user_msg) => log::error!("FATAL: {}: {}", operation_context, user_msg),
        None => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
