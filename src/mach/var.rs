use super::{Kind, Val};
use std::collections::HashMap;

/// ## Variable memory

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    /// Declares `var_name` holding the zero value of `kind`,
    /// replacing any earlier declaration.
    pub fn reserve(&mut self, var_name: &str, kind: Kind) {
        self.vars.insert(var_name.to_string(), kind.default_val());
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.to_string(), value);
            }
        };
    }
}
