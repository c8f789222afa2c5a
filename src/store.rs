use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

/// Run-wide variable table. Created once, shared across every test file,
/// never cleared until the process exits.
pub struct Global {
    pub variables: HashMap<String, String>,
}

impl Global {
    pub fn new() -> Self {
        Global {
            variables: HashMap::new(),
        }
    }

    pub fn get_variable_value(&self, variable_name: &str) -> Option<&String> {
        self.variables.get(variable_name)
    }

    // Overwrites any previous binding for the same name
    pub fn insert_variable(&mut self, variable_name: &str, value: &str) {
        log::debug!("store global variable: {} = {}", variable_name, value);
        self.variables.insert(variable_name.into(), value.into());
    }
}

impl Default for Global {
    fn default() -> Self {
        Global::new()
    }
}

/// Per-test-file variable table. The host resets it by building a fresh
/// `CommandContext` at every file boundary.
pub struct Local {
    pub variables: HashMap<String, String>,
}

pub struct CommandContext {
    pub local: Local,
    pub global: Arc<RwLock<Global>>,
}

impl CommandContext {
    pub fn new(global: Arc<RwLock<Global>>) -> Self {
        let local = Local {
            variables: HashMap::new(),
        };
        CommandContext { local, global }
    }

    pub fn get_variable(&self, name: &str) -> Option<String> {
        // Get from local first
        if let Some(value) = self.local.variables.get(name) {
            return Some(value.clone());
        }

        // Then check global
        let global = self.global.read().unwrap();
        if let Some(value) = global.get_variable_value(name) {
            return Some(value.clone());
        }
        None
    }

    pub fn get_local_variable(&self, name: &str) -> Option<String> {
        self.local.variables.get(name).cloned()
    }

    pub fn get_global_variable(&self, name: &str) -> Option<String> {
        let global = self.global.read().unwrap();
        global.get_variable_value(name).cloned()
    }

    pub fn set_local_variable(&mut self, name: &str, value: &str) {
        self.local.variables.insert(name.into(), value.into());
    }

    pub fn set_global_variable(&self, name: &str, value: &str) {
        let mut global = self.global.write().unwrap();
        global.insert_variable(name, value);
    }
}
