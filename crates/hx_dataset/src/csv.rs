//! Minimal CSV reader for the news dataset.
//!
//! Handles quoted fields, escaped quotes (`""`), embedded commas and
//! newlines inside quotes, and CRLF line endings. Blank lines are skipped.

/// Parse CSV text into rows of fields.
pub fn parse(input: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    // "" inside a quoted field is a literal quote
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    end_row(&mut rows, &mut row, &mut field);
                }
                '\n' => end_row(&mut rows, &mut row, &mut field),
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn end_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    if row.is_empty() && field.is_empty() {
        // blank line
        return;
    }
    row.push(std::mem::take(field));
    rows.push(std::mem::take(row));
}
