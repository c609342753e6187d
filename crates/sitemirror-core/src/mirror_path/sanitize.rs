//! Filesystem-safe sanitization of URL-derived path components.

/// Maximum length of a single sanitized component.
const COMPONENT_MAX: usize = 200;

/// Sanitizes one host or path segment for use as a file/directory name.
///
/// - Keeps ASCII letters, digits, `.`, `_`, and `-`
/// - Collapses each run of any other characters into a single `_`
/// - Caps the result at 200 characters
pub fn sanitize_component(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
            out.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }

    let trimmed = out.trim();
    if trimmed.len() > COMPONENT_MAX {
        let mut take = COMPONENT_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
