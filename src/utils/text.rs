use crate::error::{BoxOfficeError, Result};

/// Split a shell line into words.
///
/// Words are separated by whitespace. Single or double quotes group words and
/// are removed; a backslash escapes the next character outside single quotes.
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => {
                    return Err(BoxOfficeError::InvalidInput(
                        "trailing backslash".to_string(),
                    ));
                }
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(BoxOfficeError::InvalidInput(format!(
            "unterminated {q} quote"
        )));
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}
