/// One shell command, split into its program, options and parameters.
///
/// The split is purely whitespace-based, quoting is not interpreted. The
/// literal token `--` ends option recognition: everything after it is a
/// parameter, even tokens starting with `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub program: String,
    pub options: Vec<String>,
    pub parameters: Vec<String>,
}

impl ParsedCommand {
    pub fn parse(command: &str) -> Self {
        let mut tokens = command.split(' ');
        let program = tokens.next().unwrap_or("").to_string();

        let mut options = Vec::new();
        let mut parameters = Vec::new();
        let mut options_ended = false;
        for token in tokens {
            if token == "--" {
                options_ended = true;
            } else if token.starts_with('-') && !options_ended {
                options.push(token.to_string());
            } else {
                parameters.push(token.to_string());
            }
        }

        Self { program, options, parameters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_and_parameters() {
        let cmd = ParsedCommand::parse("rm -r --verbose dir1 dir2");
        assert_eq!(cmd.program, "rm");
        assert_eq!(cmd.options, ["-r", "--verbose"]);
        assert_eq!(cmd.parameters, ["dir1", "dir2"]);
    }

    /// After `--`, flag-shaped tokens are parameters; `--` itself is dropped.
    #[test]
    fn double_dash_ends_options() {
        let cmd = ParsedCommand::parse("cmd -a -- -b c");
        assert_eq!(cmd.options, ["-a"]);
        assert_eq!(cmd.parameters, ["-b", "c"]);
    }

    #[test]
    fn program_only() {
        let cmd = ParsedCommand::parse("ls");
        assert_eq!(cmd.program, "ls");
        assert!(cmd.options.is_empty());
        assert!(cmd.parameters.is_empty());
    }

    #[test]
    fn empty_command() {
        let cmd = ParsedCommand::parse("");
        assert_eq!(cmd.program, "");
        assert!(cmd.options.is_empty());
        assert!(cmd.parameters.is_empty());
    }
}
