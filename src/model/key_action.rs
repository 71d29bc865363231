//! Domain-level keyboard actions independent of key bindings.

/// User intents the box application understands.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application. Default: q/Esc
    Quit,
    /// Append the next label from the entry pool. Default: a/+
    AppendEntry,
    /// Remove the last rendered entry. Default: d/-
    RemoveEntry,
}
