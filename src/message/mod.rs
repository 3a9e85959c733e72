//! Message templates for failure outcomes.
//!
//! Templates use sequential placeholders, either `{}` or `%s`, filled left to
//! right from the argument list. Formatting never fails: placeholders without
//! a matching argument stay in the output verbatim and surplus arguments are
//! ignored.

mod macros;

const PLACEHOLDERS: [&str; 2] = ["{}", "%s"];

/// Substitute `args` into the placeholders of `template`, in order.
///
/// # Example
///
/// ```rust
/// use probable::message::format;
///
/// assert_eq!(format("user {} not found in %s", &["42", "eu-west"]), "user 42 not found in eu-west");
/// assert_eq!(format("missing {} and {}", &["a"]), "missing a and {}");
/// ```
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some((index, marker)) = next_placeholder(rest) {
        let Some(arg) = args.next() else {
            break;
        };
        output.push_str(&rest[..index]);
        output.push_str(arg.as_ref());
        rest = &rest[index + marker.len()..];
    }

    output.push_str(rest);
    output
}

fn next_placeholder(haystack: &str) -> Option<(usize, &'static str)> {
    PLACEHOLDERS
        .iter()
        .filter_map(|marker| haystack.find(marker).map(|index| (index, *marker)))
        .min_by_key(|(index, _)| *index)
}
