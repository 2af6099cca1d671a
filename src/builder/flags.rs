//! Ordered flag token sequences.

/// An ordered sequence of command-line tokens.
///
/// Flag groups are concatenated explicitly with [`FlagList::extend`]; callers
/// decide with a plain `if` whether a conditional group is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagList {
    tokens: Vec<String>,
}

impl FlagList {
    /// Create an empty flag list.
    pub fn new() -> Self {
        FlagList::default()
    }

    /// Add a single token.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.tokens.push(arg.into());
        self
    }

    /// Add multiple tokens.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tokens.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// Append another flag list.
    pub fn extend(mut self, other: FlagList) -> Self {
        self.tokens.extend(other.tokens);
        self
    }

    /// The tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join the tokens with single spaces.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    /// Join the tokens for a shell command, quoting any that need it.
    pub fn join_quoted(&self) -> String {
        self.tokens
            .iter()
            .map(|t| quote_arg(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Join command fragments, skipping empty ones so no doubled spaces appear.
pub fn join_command<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote a token for a shell command line if it contains whitespace or quotes.
pub fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '"') {
        return arg.to_string();
    }
    format!("\"{}\"", arg.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_order() {
        let flags = FlagList::new().arg("-O3").args(["-flto", "-g"]);
        assert_eq!(flags.join(), "-O3 -flto -g");
    }

    #[test]
    fn test_extend_appends_in_order() {
        let flags = FlagList::new()
            .arg("-Wall")
            .extend(FlagList::new().args(["-flto", "-O3"]));
        assert_eq!(flags.tokens(), ["-Wall", "-flto", "-O3"]);
        assert!(flags.contains("-flto"));
    }

    #[test]
    fn test_join_command_skips_empty_parts() {
        assert_eq!(join_command(["g++", "", "-c", ""]), "g++ -c");
    }

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("--debug"), "--debug");
        assert_eq!(quote_arg("C:\\Program Files\\boost"), "\"C:\\Program Files\\boost\"");
        assert_eq!(quote_arg(""), "\"\"");
    }

    #[test]
    fn test_join_quoted_keeps_spaced_token_whole() {
        let flags = FlagList::new().args(["-Iinclude", "-isystemmy boost", "-O3"]);
        assert_eq!(flags.join_quoted(), "-Iinclude \"-isystemmy boost\" -O3");
        assert_eq!(flags.join(), "-Iinclude -isystemmy boost -O3");
    }
}
