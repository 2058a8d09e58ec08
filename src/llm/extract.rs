//! Extraction of the first JSON object embedded in generated text
//!
//! Generators are asked for strict JSON but routinely wrap it in prose or
//! markdown fences. We scan for the first balanced top-level `{...}` span,
//! tracking string literals and escapes so braces inside strings don't
//! unbalance the count.

/// Find the first balanced top-level JSON object in `text`
///
/// Returns the matched span, or None if no balanced object exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
