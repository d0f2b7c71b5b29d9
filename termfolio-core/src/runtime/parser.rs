/// A submitted line split into its keyword and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased first token.
    pub keyword: String,
    pub args: Vec<String>,
}

pub struct CommandParser;

impl CommandParser {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(input: &str) -> Option<ParsedCommand> {
        let mut parts = input.split_whitespace();
        let keyword = parts.next()?.to_lowercase();
        let args = parts.map(|s| s.to_string()).collect();
        Some(ParsedCommand { keyword, args })
    }
}
