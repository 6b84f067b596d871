//! Command bar mini-language.
//!
//! A command line is at most two tokens separated by a single space: a name
//! and an optional argument. There is no quoting, so names with spaces cannot
//! be passed; anything of another shape is ignored.

/// Splits a command line into `(name, argument)`.
///
/// `"rm"` gives `("rm", "")`, `"mkdir docs"` gives `("mkdir", "docs")`.
/// Three or more tokens, and the empty line, give `("", "")`.
pub fn parse_command(line: &str) -> (&str, &str) {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, _) => (name, ""),
        (Some(name), Some(arg), None) => (name, arg),
        _ => ("", ""),
    }
}

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `rm` / `delete`: delete the selected entry.
    Delete,
    /// `mkdir <name>`
    MakeDir(&'a str),
    /// `touch <name>`
    Touch(&'a str),
    /// `mv <name>` / `rename <name>`: rename the selected entry.
    Rename(&'a str),
    /// `cd <path>`
    ChangeDir(&'a str),
    /// `q` / `quit`
    Quit,
}

impl<'a> Command<'a> {
    /// Resolves a parsed `(name, argument)` pair.
    ///
    /// Returns `None` for unknown names and for a missing or unexpected argument.
    pub fn from_parts(name: &'a str, arg: &'a str) -> Option<Self> {
        let cmd = match (name, arg.is_empty()) {
            ("rm" | "delete", true) => Command::Delete,
            ("q" | "quit", true) => Command::Quit,
            ("mkdir", false) => Command::MakeDir(arg),
            ("touch", false) => Command::Touch(arg),
            ("mv" | "rename", false) => Command::Rename(arg),
            ("cd", false) => Command::ChangeDir(arg),
            _ => return None,
        };
        Some(cmd)
    }

    pub fn from_line(line: &'a str) -> Option<Self> {
        let (name, arg) = parse_command(line);
        Self::from_parts(name, arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_shapes() {
        assert_eq!(parse_command("rm"), ("rm", ""));
        assert_eq!(parse_command("create file.txt"), ("create", "file.txt"));
        assert_eq!(parse_command("a b c"), ("", ""));
        assert_eq!(parse_command(""), ("", ""));
    }

    #[test]
    fn parse_is_split_on_single_spaces() {
        // a double space makes three tokens
        assert_eq!(parse_command("mv  x"), ("", ""));
        assert_eq!(parse_command("rm "), ("rm", ""));
        assert_eq!(parse_command(" rm"), ("", "rm"));
    }

    #[test]
    fn commands_resolve_by_name() {
        assert_eq!(Command::from_line("rm"), Some(Command::Delete));
        assert_eq!(Command::from_line("delete"), Some(Command::Delete));
        assert_eq!(Command::from_line("mkdir docs"), Some(Command::MakeDir("docs")));
        assert_eq!(Command::from_line("touch a.txt"), Some(Command::Touch("a.txt")));
        assert_eq!(Command::from_line("mv b.txt"), Some(Command::Rename("b.txt")));
        assert_eq!(Command::from_line("rename b.txt"), Some(Command::Rename("b.txt")));
        assert_eq!(Command::from_line("cd ~/src"), Some(Command::ChangeDir("~/src")));
        assert_eq!(Command::from_line("q"), Some(Command::Quit));
    }

    #[test]
    fn unknown_or_malformed_commands_are_ignored() {
        assert_eq!(Command::from_line("frobnicate"), None);
        assert_eq!(Command::from_line("rm notes.txt"), None);
        assert_eq!(Command::from_line("mkdir"), None);
        assert_eq!(Command::from_line("touch a b"), None);
        assert_eq!(Command::from_line(""), None);
    }
}
