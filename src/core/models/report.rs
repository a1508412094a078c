//! Where list failures go when the caller wants a list no matter what.

use super::error::ListError;

/// Receives fetch failures that are converted into an empty list.
pub trait ErrorReporter {
    fn report(&self, error: &ListError);
}

/// Default reporter: writes the error through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &ListError) {
        if error.is_transport() {
            log::error!("Error fetching models: {}", error);
        } else {
            log::error!("Error reading model list: {}", error);
        }
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&ListError),
{
    fn report(&self, error: &ListError) {
        self(error)
    }
}
