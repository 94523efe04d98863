use tsgen_core::{Error, Result};

const DIRECTIVE: &str = "@tsType";

/// Extracts the type override from a field's documentation.
///
/// The directive is written `@tsType(<type>)` anywhere in the text. The
/// argument runs to the matching close parenthesis; parentheses inside
/// nested groups or string literals do not end it. Returns `Ok(None)` when
/// the documentation carries no directive.
pub fn type_override(documentation: &str) -> Result<Option<String>> {
    let Some(start) = find_directive(documentation) else {
        return Ok(None);
    };

    let rest = &documentation[start + DIRECTIVE.len()..];

    let Some(args) = rest.strip_prefix('(') else {
        return Err(Error::malformed_directive(format!(
            "expected `(` after `{DIRECTIVE}`"
        )));
    };

    let Some(end) = closing_paren(args) else {
        return Err(Error::malformed_directive(format!(
            "unterminated `{DIRECTIVE}(` argument"
        )));
    };

    let ty = args[..end].trim();

    if ty.is_empty() {
        return Err(Error::malformed_directive(format!(
            "`{DIRECTIVE}()` requires a type"
        )));
    }

    Ok(Some(ty.to_string()))
}

/// Byte offset of the first `@tsType` not followed by another identifier
/// character (`@tsTypeName` is a different annotation).
fn find_directive(src: &str) -> Option<usize> {
    src.match_indices(DIRECTIVE)
        .map(|(offset, _)| offset)
        .find(|offset| {
            src[offset + DIRECTIVE.len()..]
                .chars()
                .next()
                .map_or(true, |ch| !(ch.is_alphanumeric() || ch == '_'))
        })
}

/// Byte offset of the `)` closing an argument list whose `(` was already
/// consumed.
fn closing_paren(src: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut quote = None;
    let mut escaped = false;

    for (i, ch) in src.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
