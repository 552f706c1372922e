//! Numbered console menus.

use std::io::{self, BufRead, Write};

const PROMPT: &str = "?";

/// Print a numbered menu and block until the user picks an entry or quits.
///
/// Output looks like:
/// ```text
/// CHOOSE NOTES DIRECTORY:
/// -----------------------
/// 0 - frontend
/// 1 - backend
/// ?
/// ```
///
/// Returns `Ok(None)` on `q`/`Q` or end of input. Anything that is not an
/// index into `items` is ignored and the prompt repeats.
pub fn choose<'a, T, F, R, W>(
    header: &str,
    items: &'a [T],
    label: F,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<&'a T>>
where
    F: Fn(&T) -> &str,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", header)?;
    writeln!(output, "{}", "-".repeat(header.chars().count()))?;
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "{} - {}", i, label(item))?;
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let choice = line.trim();
        if choice == "q" || choice == "Q" {
            return Ok(None);
        }
        if let Some(item) = choice.parse::<usize>().ok().and_then(|i| items.get(i)) {
            return Ok(Some(item));
        }
    }
}

/// Pick the only item without prompting, otherwise fall through to [`choose`].
pub fn choose_or_single<'a, T, F, R, W>(
    header: &str,
    items: &'a [T],
    label: F,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<&'a T>>
where
    F: Fn(&T) -> &str,
    R: BufRead,
    W: Write,
{
    match items {
        [only] => Ok(Some(only)),
        _ => choose(header, items, label, input, output),
    }
}
