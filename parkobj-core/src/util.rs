use std::fmt;

/// Evaluates to the success value of `$expr`,
/// or logs the failure with the given message and evaluates `$never`.
#[macro_export]
macro_rules! try_log {
    (
        $expr:expr,
        expect $must:literal $(
            (
                $($must_args:expr),* $(,)?
            )
        )?
        or $never:expr
    ) => {
        {
            if let Some(value) = $crate::util::TryLog::convert_or_log(
                $expr,
                format_args!($must, $($($must_args),*)?),
            ) {
                value
            } else {
                $never
            }
        }
    }
}

pub use try_log;

/// An expression that can be used for `$expr` in [`try_log!`].
pub trait TryLog<T> {
    /// Returns the successful result as `Some`, or log the error with `must`.
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T>;
}

impl<T> TryLog<T> for Option<T> {
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T> {
        if let Some(value) = this {
            Some(value)
        } else {
            bevy::log::error!("{must}");
            None
        }
    }
}

impl<T, E: fmt::Display> TryLog<T> for Result<T, E> {
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T> {
        match this {
            Ok(value) => Some(value),
            Err(err) => {
                bevy::log::error!("{must}: {err}");
                None
            }
        }
    }
}

/// Logs a failure at the resolver boundary in the form
/// `Error: {cause} when processing object {path}`.
pub fn log_object_error<T, E: fmt::Display>(
    result: Result<T, E>,
    path: impl fmt::Display,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            bevy::log::error!("Error: {err} when processing object {path}");
            None
        }
    }
}

/// Case-insensitive check of a path's extension.
pub fn has_extension(path: &std::path::Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
