use crate::command::Command;
use crate::error::Error;
use crate::function::RandomEmailFunction;
use crate::function::RandomStringFunction;
use crate::function::DEFAULT_EMAIL_DOMAIN;
use crate::page::Page;
use crate::store::CommandContext;

fn parse_length(value: &str) -> Result<usize, Error> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::CommandError(format!("Invalid random length '{}'", value)))
}

/// `typeRichText` — target locates the rich-text editor frame, value is the
/// text to inject. Frame traversal is the host's job.
pub struct TypeRichText;

impl Command for TypeRichText {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        page.set_rich_text(&element, value)
    }
}

/// `typeRepeated` — types the value twice, separated by `__`.
pub struct TypeRepeated;

impl Command for TypeRepeated {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        let text = format!("{}__{}", value, value);
        page.replace_text(&element, &text)
    }
}

/// `typeRandom` — value is the decimal length of the random string to type.
pub struct TypeRandom;

impl Command for TypeRandom {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        let f = RandomStringFunction {
            length: parse_length(value)?,
        };
        page.replace_text(&element, &f.apply())
    }
}

/// `typeRandomEmail` — value is the decimal length of the random local part.
pub struct TypeRandomEmail {
    pub domain: String,
}

impl Default for TypeRandomEmail {
    fn default() -> Self {
        TypeRandomEmail {
            domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl Command for TypeRandomEmail {
    fn execute(
        &self,
        _ctx: &mut CommandContext,
        page: &dyn Page,
        target: &str,
        value: &str,
    ) -> Result<(), Error> {
        let element = page.find_element(target)?;
        let f = RandomEmailFunction {
            length: parse_length(value)?,
            domain: self.domain.clone(),
        };
        page.replace_text(&element, &f.apply())
    }
}
