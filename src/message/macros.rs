//! Macros for building failure outcomes from message templates.

/// Build a failure [`Outcome`](crate::core::Outcome) from a template and
/// arguments, optionally capturing a fault.
///
/// Arguments can be anything implementing `ToString`; they fill the `{}` or
/// `%s` placeholders of the template in order.
///
/// # Example
///
/// ```
/// use probable::core::{Fault, Outcome, State};
/// use probable::failure;
///
/// let missing: Outcome<u32> = failure!("order {} not found in %s", 17, "archive");
/// assert_eq!(missing.state(), State::Failure);
/// assert_eq!(missing.message(), "order 17 not found in archive");
///
/// let fault = Fault::raised("connection reset");
/// let lost: Outcome<u32> = failure!(fault => "lookup of {} failed", 17);
/// assert!(lost.fault().is_some());
/// ```
#[macro_export]
macro_rules! failure {
    ($fault:expr => $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::core::Outcome::failure_with_fmt(
            $fault,
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),*] as &[::std::string::String],
        )
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::core::Outcome::failure_fmt(
            $template,
            &[$(::std::string::ToString::to_string(&$arg)),*] as &[::std::string::String],
        )
    };
}
