use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

// The language has a single flat namespace: a variable is defined exactly
// if it has an entry here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    map: HashMap<String, i32>,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self
            .map
            .iter()
            .sorted()
            .map(|(name, value)| format!("{} -> {}", name, value))
            .join(", ");

        write!(f, "{{ {} }}", map)
    }
}

impl Environment {
    pub fn empty() -> Environment {
        Environment {
            map: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.map.get(name).copied()
    }

    pub fn set(&mut self, name: String, value: i32) {
        self.map.insert(name, value);
    }
}
