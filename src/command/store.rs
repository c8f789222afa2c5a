use crate::command::Command;
use crate::error::Error;
use crate::page::Page;
use crate::store::CommandContext;

/// `storeGlobal` — target is the literal value, value is the variable name.
pub struct StoreGlobal;

impl Command for StoreGlobal {
    fn execute(
        &self,
        ctx: &mut CommandContext,
        _page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        ctx.set_global_variable(value, target);
        Ok(())
    }
}

/// `storeValueGlobal` — target is a locator, value is the variable name.
pub struct StoreValueGlobal;

impl Command for StoreValueGlobal {
    fn execute(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        if value.is_empty() {
            // Backward compatibility mode: no variable name means read the
            // entire text of the page and store it keyed by the locator
            // string itself.
            let body = page.body_text()?;
            ctx.set_global_variable(target, &body);
            return Ok(());
        }

        let element = page.find_element(target)?;
        let input_value = page.get_input_value(&element)?;
        ctx.set_global_variable(value, &input_value);
        Ok(())
    }
}

/// `storeTextGlobal` — stores the visible text of the located element.
pub struct StoreTextGlobal;

impl Command for StoreTextGlobal {
    fn execute(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        let text = page.get_text(&element)?;
        ctx.set_global_variable(value, &text);
        Ok(())
    }
}

/// `storeAttributeGlobal` — target encodes element selector plus attribute
/// name, resolved by the host in one call.
pub struct StoreAttributeGlobal;

impl Command for StoreAttributeGlobal {
    fn execute(
        &self,
        ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let attribute = page.find_attribute(target)?;
        ctx.set_global_variable(value, &attribute);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;
    use crate::store::Global;
    use std::sync::Arc;
    use std::sync::RwLock;

    fn ctx() -> CommandContext {
        CommandContext::new(Arc::new(RwLock::new(Global::new())))
    }

    // |storeGlobal | http://localhost/ | baseURL |
    #[test]
    fn test_store_global_literal() {
        let mut ctx = ctx();
        let page = FakePage::new();

        StoreGlobal
            .execute(&mut ctx, &page, "http://localhost/", "baseURL")
            .unwrap();

        assert_eq!(
            ctx.get_global_variable("baseURL"),
            Some("http://localhost/".to_string())
        );
        assert_eq!(ctx.get_local_variable("baseURL"), None);
    }

    #[test]
    fn test_store_global_overwrites() {
        let mut ctx = ctx();
        let page = FakePage::new();

        StoreGlobal.execute(&mut ctx, &page, "first", "k").unwrap();
        StoreGlobal.execute(&mut ctx, &page, "second", "k").unwrap();

        assert_eq!(ctx.get_global_variable("k"), Some("second".to_string()));
    }

    // |storeValueGlobal | username | login |
    #[test]
    fn test_store_value_global() {
        let mut ctx = ctx();
        let page = FakePage::new().with_input_value("username", "alice");

        StoreValueGlobal
            .execute(&mut ctx, &page, "username", "login")
            .unwrap();

        assert_eq!(ctx.get_global_variable("login"), Some("alice".to_string()));
    }

    // Empty variable name: the whole page text lands under the locator key
    #[test]
    fn test_store_value_global_without_name_stores_body_text() {
        let mut ctx = ctx();
        let page = FakePage::new().with_body("Welcome to the portal");

        StoreValueGlobal
            .execute(&mut ctx, &page, "pageDump", "")
            .unwrap();

        assert_eq!(
            ctx.get_global_variable("pageDump"),
            Some("Welcome to the portal".to_string())
        );
    }

    #[test]
    fn test_store_value_global_element_not_found() {
        let mut ctx = ctx();
        let page = FakePage::new();

        let err = StoreValueGlobal
            .execute(&mut ctx, &page, "missing", "name")
            .unwrap_err();
        assert_eq!(err.to_string(), "Element not found: missing");
        assert_eq!(ctx.get_global_variable("name"), None);
    }

    // |storeTextGlobal | //div[@id='msg'] | message |
    #[test]
    fn test_store_text_global() {
        let mut ctx = ctx();
        let page = FakePage::new().with_text("//div[@id='msg']", "saved");

        StoreTextGlobal
            .execute(&mut ctx, &page, "//div[@id='msg']", "message")
            .unwrap();

        assert_eq!(ctx.get_global_variable("message"), Some("saved".to_string()));
    }

    #[test]
    fn test_store_text_global_element_not_found() {
        let mut ctx = ctx();
        let page = FakePage::new();

        let err = StoreTextGlobal
            .execute(&mut ctx, &page, "//div[@id='msg']", "message")
            .unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }

    // |storeAttributeGlobal | link@href | target |
    #[test]
    fn test_store_attribute_global() {
        let mut ctx = ctx();
        let page = FakePage::new().with_attribute("link@href", "/home");

        StoreAttributeGlobal
            .execute(&mut ctx, &page, "link@href", "target")
            .unwrap();

        assert_eq!(ctx.get_global_variable("target"), Some("/home".to_string()));
    }

    #[test]
    fn test_store_attribute_global_not_found() {
        let mut ctx = ctx();
        let page = FakePage::new();

        let err = StoreAttributeGlobal
            .execute(&mut ctx, &page, "link@href", "target")
            .unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }
}
