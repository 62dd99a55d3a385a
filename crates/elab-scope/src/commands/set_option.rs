use super::Session;
use crate::ast::Ident;
use crate::env::GlobalSymbolTable;
use crate::options::OptionValue;

impl<T: GlobalSymbolTable> Session<T> {
    /// `set_option name value` in the innermost scope. Enclosing scopes keep
    /// their value, and the setting goes away with the scope's `end`.
    pub fn elab_set_option(&mut self, name: &Ident, value: OptionValue) {
        log::debug!("set_option {} {} in `{}`", name.name, value, self.current_namespace());
        self.scopes.top_mut().set_option(name.name.to_string(), value);
    }
}
