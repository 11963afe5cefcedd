//! Cross-cutting views over the domain entities.

use uuid::Uuid;

/// Entities addressable by a stable unique id.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities carrying a user-chosen name, matched during selector resolution.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// One-line label shown in prompts and suggestion output.
pub trait Displayable {
    fn display_label(&self) -> String;
}
