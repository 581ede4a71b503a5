use regex::Regex;

use super::Makefile;

/// Extract variables and rules from raw Makefile text.
pub(super) fn parse(content: &str) -> Makefile {
    let content = strip_comments(content);
    let mut content = fold_continuations(&content);
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }

    let mut makefile = Makefile::new();

    // The patterns are literals, compilation cannot fail.
    let variable = Regex::new(r#"(?m)^([^:#= \n]*?) *?= *(?:\\?\n\s*|)("\s*?.*?\s*?"|.*?)$"#).unwrap();
    let rule = Regex::new(r"(?m)^(.*?):\s*?(.*?)\s*?\n((?:(?:\t| {4}).*?\n)*)").unwrap();

    for captures in variable.captures_iter(&content) {
        let name = &captures[1];
        // Windows path convention
        let value = captures[2].replace('/', "\\");
        makefile.add_variable(name, value);
    }

    for captures in rule.captures_iter(&content) {
        let target = &captures[1];
        if target == ".PHONY" {
            continue;
        }
        makefile.add_rule(
            target,
            prerequisites_from_str(&captures[2]),
            recipe_from_str(&captures[3]),
        );
    }

    makefile
}

/// Remove everything from an unescaped `#` to the end of the line.
fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut previous = '\0';
    let mut in_comment = false;
    for c in content.chars() {
        if c == '\n' {
            in_comment = false;
            out.push(c);
            previous = c;
            continue;
        }
        if in_comment {
            continue;
        }
        if c == '#' && previous != '\\' {
            in_comment = true;
            previous = c;
            continue;
        }
        out.push(c);
        previous = c;
    }
    out
}

/// Collapse backslash-newline continuations so that multi-line constructs
/// become one logical line.
fn fold_continuations(content: &str) -> String {
    let continuation = Regex::new(r"\s*?\\\s*?\n\s*").unwrap();
    continuation.replace_all(content, " ").into_owned()
}

fn prerequisites_from_str(section: &str) -> Vec<String> {
    let section = section.trim();
    // The order-only marker is dropped, both kinds become plain prerequisites.
    let section = match section.strip_prefix('|') {
        Some(rest) => rest.trim_start(),
        None => section,
    };
    let prerequisites: Vec<String> = section.split(' ').map(str::to_string).collect();
    if prerequisites == [""] { Vec::new() } else { prerequisites }
}

fn recipe_from_str(section: &str) -> Vec<String> {
    let recipe: Vec<String> = section.trim().split('\n').map(str::to_string).collect();
    if recipe == [""] { Vec::new() } else { recipe }
}
