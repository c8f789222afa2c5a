use crate::command::Command;
use crate::error::Error;
use crate::page::Page;
use crate::store::CommandContext;

// Right mouse button code in DOM mouse events
const RIGHT_BUTTON: i32 = 2;

/// `contextMenu` — raises the context menu on the target element.
pub struct ContextMenu;

impl Command for ContextMenu {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        _value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        page.fire_mouse_event(&element, "mousedown", RIGHT_BUTTON)
    }
}

/// `doubleClick` — fires a `dblclick` on the target element.
pub struct DoubleClick;

impl Command for DoubleClick {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        _value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        page.fire_mouse_event(&element, "dblclick", 0)
    }
}
