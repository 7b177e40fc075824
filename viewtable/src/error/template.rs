//! Template error types

/// Errors that can occur while evaluating a template function.
///
/// Table construction itself cannot fail; missing sections, empty rows, and
/// missing `abbr` values all have defined defaults. The only failure channel
/// is the user-supplied template function reporting an error, which
/// [`View::render`](crate::View::render) passes through unchanged — no
/// partial output is returned.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template function failed to evaluate.
    #[error("template evaluation failed: {message}")]
    Evaluation {
        /// Description of the failure.
        message: String,
    },
}

impl TemplateError {
    /// Creates a new evaluation error.
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation {
            message: message.into(),
        }
    }
}
