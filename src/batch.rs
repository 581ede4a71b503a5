//! Render a parsed [`Makefile`] as a Windows batch script.
//!
//! The generated script dispatches on its first argument: one label per rule,
//! prerequisites re-enter the script through `CALL make.bat <prereq>`, and a
//! trailing `:error` block handles unknown targets.

use regex::Regex;

use crate::{command::ParsedCommand, lookup, makefile::Makefile};

const ERROR_BLOCK: &str = r#":error
    IF "%1"=="" (
        ECHO make: *** No targets specified and no makefile found.  Stop.
    ) ELSE (
        ECHO make: *** No rule to make target '%1%'. Stop.
    )
    GOTO :EOF
"#;

/// Render the batch script for `makefile`.
///
/// The output is deterministic: variables and rules are emitted in their
/// stored order, so the same `Makefile` always renders to the same text.
pub fn render(makefile: &Makefile) -> String {
    render_with_observer(makefile, |_| {})
}

/// Like [`render`], but calls `observer` for every recipe command that goes
/// through the command-line splitter (`cd` sub-commands are handled before
/// splitting and are not reported).
pub fn render_with_observer(makefile: &Makefile, mut observer: impl FnMut(&ParsedCommand)) -> String {
    let mut out = String::from("@echo off\n\n");

    for (name, value) in makefile.variables() {
        out.push_str(&format!("SET {name}={value}\n"));
    }
    out.push('\n');

    for target in makefile.rules().keys() {
        out.push_str(&format!("IF /I \"%1\"==\"{target}\" GOTO {target}\n"));
    }
    if makefile.rules().contains_key("all") {
        out.push_str("IF /I \"%1\"==\"\" GOTO all\n");
    }
    out.push_str("GOTO error\n\n");

    for (target, rule) in makefile.rules() {
        out.push_str(&format!(":{target}\n"));
        for prerequisite in &rule.prerequisites {
            out.push_str(&format!("\tCALL make.bat {prerequisite}\n"));
        }
        for line in &rule.recipe {
            for translated in convert_recipe_line(line, &mut observer) {
                out.push_str(&format!("\t{translated}\n"));
            }
        }
        out.push_str("\tGOTO :EOF\n\n");
    }

    out.push_str(ERROR_BLOCK);
    out
}

/// Translate one recipe line.
///
/// Returns the translated `&&`-joined line, followed by one `POPD` line per
/// `cd` encountered in this recipe line.
fn convert_recipe_line(line: &str, observer: &mut impl FnMut(&ParsedCommand)) -> Vec<String> {
    let mut translated = Vec::new();
    let mut dirs_entered = 0;

    for command in line.trim().split("&&") {
        let command = command.trim();

        if let Some(path) = command.strip_prefix("cd ") {
            // `cd` never goes through the look-up table
            dirs_entered += 1;
            translated.push(format!("PUSHD {path}"));
            continue;
        }

        let parsed = ParsedCommand::parse(command);
        observer(&parsed);

        match lookup::lookup(&parsed.program) {
            Some(mapping) => {
                let options: Vec<&str> = parsed.options.iter().map(|opt| mapping.map_option(opt)).collect();
                translated.push(format!(
                    "{} {} {}",
                    mapping.batch,
                    parsed.parameters.join(" "),
                    options.join(" ")
                ));
            }
            // unknown commands pass through verbatim
            None => translated.push(command.to_string()),
        }
    }

    let mut lines = vec![substitute_references(&translated.join(" && "))];
    for _ in 0..dirs_entered {
        lines.push("POPD".to_string());
    }
    lines
}

/// `$(NAME)` and `${NAME}` become `%NAME%`; a reference to the `MAKE`
/// variable becomes a `CALL` back into the generated script.
fn substitute_references(line: &str) -> String {
    let reference = Regex::new(r"\$[({](.*?)[)}]").unwrap();
    let line = reference.replace_all(line, "%$1%");
    line.replace("%MAKE%", "CALL make.bat")
}
