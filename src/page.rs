use crate::error::Error;

/// Opaque element handle. The host runner decides what the inner string
/// identifies; this crate only hands it back to the same `Page`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ElementRef(pub String);

/// DOM collaborator provided by the host test runner. Locator strategies,
/// event semantics and text mutation all live behind this seam.
pub trait Page {
    fn find_element(&self, locator: &str) -> Result<ElementRef, Error>;

    /// The locator encodes an element selector plus an attribute name; the
    /// host parses the pair.
    fn find_attribute(&self, locator: &str) -> Result<String, Error>;

    fn body_text(&self) -> Result<String, Error>;

    fn get_input_value(&self, element: &ElementRef) -> Result<String, Error>;

    fn get_text(&self, element: &ElementRef) -> Result<String, Error>;

    fn replace_text(&self, element: &ElementRef, value: &str) -> Result<(), Error>;

    fn set_rich_text(&self, element: &ElementRef, value: &str) -> Result<(), Error>;

    fn fire_mouse_event(&self, element: &ElementRef, kind: &str, button: i32)
        -> Result<(), Error>;
}
