use indexmap::IndexSet;
use log::trace;

use crate::grammars::types::NonTerminal;

pub const DEFAULT_FRESH_PREFIX: &str = "X";

/// Hands out non-terminal names of the form `<prefix><n>` that were neither
/// known when the factory was created nor issued before.
#[derive(Debug, Clone)]
pub struct FreshSymbols {
    prefix: String,
    counter: usize,
    taken: IndexSet<String>,
    issued: Vec<NonTerminal>,
}

impl FreshSymbols {
    pub fn new<I, S>(prefix: impl Into<String>, taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix = prefix.into();
        assert!(!prefix.is_empty());

        FreshSymbols {
            prefix,
            counter: 0,
            taken: taken.into_iter().map(Into::into).collect(),
            issued: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn next_non_terminal(&mut self) -> NonTerminal {
        loop {
            let name = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;

            if self.taken.insert(name.clone()) {
                trace!("issued fresh non-terminal {name}");

                let nt = NonTerminal::new(name);
                self.issued.push(nt.clone());
                return nt;
            }
        }
    }

    /// Everything issued so far, oldest first.
    pub fn issued(&self) -> &[NonTerminal] {
        &self.issued
    }
}

/// Whether `name` looks like something a factory with `prefix` would issue.
pub fn is_fresh_name(prefix: &str, name: &str) -> bool {
    name.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn skips_names_already_taken() {
        let mut fresh = FreshSymbols::new("X", ["S", "X0", "X2"]);

        let names = (0..3)
            .map(|_| fresh.next_non_terminal().to_string())
            .collect::<Vec<_>>();

        assert_eq!(names, ["X1", "X3", "X4"]);
        assert_eq!(fresh.issued().len(), 3);
    }

    #[test]
    fn never_repeats_a_name() {
        let mut fresh = FreshSymbols::new("N", Vec::<String>::new());
        let names = (0..50)
            .map(|_| fresh.next_non_terminal())
            .collect::<IndexSet<_>>();

        assert_eq!(names.len(), 50);
    }

    #[test]
    fn recognises_the_naming_scheme() {
        assert!(is_fresh_name("X", "X0"));
        assert!(is_fresh_name("X", "X123"));
        assert!(!is_fresh_name("X", "X"));
        assert!(!is_fresh_name("X", "Xa"));
        assert!(!is_fresh_name("X", "Y1"));
        assert!(!is_fresh_name("X", "X_1"));
    }
}
