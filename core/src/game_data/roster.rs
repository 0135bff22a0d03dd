//! Tracked name sets
//!
//! A roster is the externally supplied list of creature names that count as
//! "in scope" for an encounter. Queries take a roster by reference and never
//! decide on their own which names belong to it.

use hashbrown::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: HashSet<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending order
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Roster {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_match() {
        let roster: Roster = ["Ragnaros", "Core Hound"].into_iter().collect();
        assert!(roster.contains("Ragnaros"));
        assert!(!roster.contains("ragnaros"));
        assert!(!roster.contains("\"Ragnaros\""));
        assert!(!roster.contains("Core"));
    }

    #[test]
    fn test_insert_and_extend_deduplicate() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.insert("Firemaw"));
        assert!(!roster.insert("Firemaw"));
        roster.extend(["Ebonroc", "Firemaw", "Flamegor"]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.sorted_names(), vec!["Ebonroc", "Firemaw", "Flamegor"]);
    }
}
