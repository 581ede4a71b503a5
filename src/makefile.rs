use linked_hash_map::LinkedHashMap;

mod extract;

/// The parsed representation of a Makefile: its variables and its rules.
///
/// Both maps preserve insertion order so that the generated batch script is
/// byte-identical across runs. Re-assigning a variable or re-defining a rule
/// overwrites the value but keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct Makefile {
    variables: LinkedHashMap<String, String>,
    rules: LinkedHashMap<String, Rule>,
}

/// A single rule: the prerequisites and recipe associated with one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub prerequisites: Vec<String>,
    pub recipe: Vec<String>,
}

impl Makefile {
    pub fn new() -> Self {
        Default::default()
    }

    /// Parse the content of a Makefile.
    ///
    /// Extraction is best-effort: unrecognized lines are skipped, an empty
    /// input yields an empty `Makefile`.
    pub fn parse(content: &str) -> Self {
        extract::parse(content)
    }

    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        // `insert` moves an existing key to the back, losing its position
        if let Some(slot) = self.variables.get_mut(&name) {
            *slot = value;
        } else {
            self.variables.insert(name, value);
        }
    }

    /// Add a rule. `.PHONY` is never stored as a rule.
    pub fn add_rule(&mut self, target: impl Into<String>, prerequisites: Vec<String>, recipe: Vec<String>) {
        let target = target.into();
        if target == ".PHONY" {
            return;
        }
        let rule = Rule { prerequisites, recipe };
        if let Some(slot) = self.rules.get_mut(&target) {
            *slot = rule;
        } else {
            self.rules.insert(target, rule);
        }
    }

    /// Remove a variable. If the variable is not present, do nothing.
    pub fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    /// Remove a rule. If the target is not present, do nothing.
    pub fn remove_rule(&mut self, target: &str) {
        self.rules.remove(target);
    }

    pub fn variables(&self) -> &LinkedHashMap<String, String> {
        &self.variables
    }

    pub fn rules(&self) -> &LinkedHashMap<String, Rule> {
        &self.rules
    }
}
