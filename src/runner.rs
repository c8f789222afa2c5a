use crate::command::CommandRegistry;
use crate::config::Step;
use crate::config::TestFile;
use crate::error::Error;
use crate::interpolate::replace_variables;
use crate::page::Page;
use crate::store::CommandContext;
use crate::store::Global;
use std::sync::Arc;
use std::sync::RwLock;

/// Drives test files through the command registry. Owns the run-wide global
/// table; each file gets a fresh local table over it.
pub struct TestRunner {
    registry: CommandRegistry,
    global: Arc<RwLock<Global>>,
}

impl TestRunner {
    pub fn new() -> Self {
        TestRunner {
            registry: CommandRegistry::new(),
            global: Arc::new(RwLock::new(Global::new())),
        }
    }

    pub fn global(&self) -> Arc<RwLock<Global>> {
        Arc::clone(&self.global)
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Fresh per-file context sharing the run-wide global table. Hosts that
    /// own their local table use this once per file and run steps through it.
    pub fn new_context(&self) -> CommandContext {
        CommandContext::new(Arc::clone(&self.global))
    }

    pub fn run_file(&self, file: &TestFile, page: &dyn Page) -> Result<(), Error> {
        log::debug!("run file: {}", file.name);
        let mut ctx = self.new_context();
        self.run_steps(&mut ctx, page, &file.steps)
    }

    pub fn run_steps(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        steps: &[Step],
    ) -> Result<(), Error> {
        for step in steps {
            self.run_step(ctx, page, step)?;
        }
        Ok(())
    }

    pub fn run_step(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        step: &Step,
    ) -> Result<(), Error> {
        // Arguments go through variable replacement before the command runs
        let target = replace_variables(ctx, &step.target);
        let value = replace_variables(ctx, &step.value);

        log::debug!("step: {} | {} | {}", step.command, target, value);
        self.registry.execute(&step.command, ctx, page, &target, &value)
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        TestRunner::new()
    }
}
