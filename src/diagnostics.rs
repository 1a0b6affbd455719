use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where a concrete
/// fix exists, how to fix it. Designed to be readable by both humans and
/// LLM agents.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::HistoryNotFound { path } => format!("\
# Error: History Log Not Found

`{}` does not exist.

## Fix

Create the log in the repository root before appending:

    touch PROMPT_HISTORY.md
", path.display()),

        Error::Io(e) => format!("\
# Error: I/O

{e}
"),

        Error::TomlDe(e) => format!("\
# Error: Invalid TOML

{e}

## Fix

Check the `exclude` list in `.doctidy.toml`.
"),

        Error::Walk(e) => format!("\
# Error: Traversal

{e}
"),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn history_diagnostic_names_the_expected_path() {
        let e = Error::HistoryNotFound { path: "PROMPT_HISTORY.md".into() };
        let md = render_error(&e);
        assert!(md.contains("# Error: History Log Not Found"));
        assert!(md.contains("`PROMPT_HISTORY.md`"));
        assert!(md.contains("## Fix"));
    }

    #[test]
    fn toml_diagnostic_points_at_the_config_file() {
        let Err(parse) = toml::from_str::<toml::Value>("exclude = [") else {
            panic!("expected a parse error");
        };
        let md = render_error(&Error::TomlDe(parse));
        assert!(md.contains(".doctidy.toml"));
    }
}
