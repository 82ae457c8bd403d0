use thiserror::Error;

/// Errors reported by the validating rectangle constructors.
///
/// The permissive API (`Rectangle::new`, `Rectangle::set_to`) never produces
/// these; it drops bad input silently. `try_new` and `try_set_to` surface the
/// same checks as errors instead.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("expected {component} to be a finite number, but it was {value}")]
    NonFinite { component: &'static str, value: f64 },

    #[error("expected {component} to be non-negative, but it was {value}")]
    NegativeSize { component: &'static str, value: f64 },
}
