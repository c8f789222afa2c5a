pub mod event;
pub mod input;
pub mod store;

use crate::error::Error;
use crate::page::Page;
use crate::store::CommandContext;
use std::collections::HashMap;

/// An extension command. Every command takes the two-column step arguments
/// of the host runner's table format; what each column means is up to the
/// command (locator, literal, variable name, ...).
pub trait Command {
    fn execute(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error>;
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        registry.register("storeGlobal", Box::new(store::StoreGlobal));
        registry.register("storeValueGlobal", Box::new(store::StoreValueGlobal));
        registry.register("storeTextGlobal", Box::new(store::StoreTextGlobal));
        registry.register("storeAttributeGlobal", Box::new(store::StoreAttributeGlobal));
        registry.register("typeRichText", Box::new(input::TypeRichText));
        registry.register("typeRepeated", Box::new(input::TypeRepeated));
        registry.register("typeRandom", Box::new(input::TypeRandom));
        registry.register("typeRandomEmail", Box::new(input::TypeRandomEmail::default()));
        registry.register("contextMenu", Box::new(event::ContextMenu));
        registry.register("doubleClick", Box::new(event::DoubleClick));

        registry
    }

    pub fn register(&mut self, name: &str, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn execute(
        &self,
        name: &str,
        ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| Error::CommandError(format!("Command '{}' not found", name)))?;
        command.execute(ctx, page, target, value)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        CommandRegistry::new()
    }
}
