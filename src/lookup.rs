//! The command look-up table.
//!
//! Maps a POSIX command name to its batch equivalent, together with the
//! per-option translations. Plain reference data, no behavior beyond lookup.

pub struct CommandMapping {
    pub program: &'static str,
    pub batch: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

pub const POSIX_TO_BATCH: &[CommandMapping] = &[
    CommandMapping {
        program: "mkdir",
        batch: "MKDIR",
        options: &[("--help", "/?"), ("-p", "")],
    },
    CommandMapping {
        program: "rm",
        batch: "DEL /Q",
        options: &[("--help", "/?"), ("-f", "/F")],
    },
    CommandMapping {
        program: "ls",
        batch: "DIR",
        options: &[("--help", "/?"), ("-l", "/Q"), ("-a", "/A"), ("--all", "/A")],
    },
    CommandMapping {
        program: "cp",
        batch: "XCOPY /Y",
        options: &[("--help", "/?")],
    },
];

pub fn lookup(program: &str) -> Option<&'static CommandMapping> {
    POSIX_TO_BATCH.iter().find(|mapping| mapping.program == program)
}

impl CommandMapping {
    /// Translate one option token. Unknown options pass through unchanged.
    pub fn map_option<'a>(&self, option: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|(posix, _)| *posix == option)
            .map(|(_, batch)| *batch)
            .unwrap_or(option)
    }
}
