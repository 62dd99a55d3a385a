//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use elab_scope::{
    Command, Environment, Ident, Name, OpenSyntax, RenamePair, ScopedExtension, Session,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A session over an environment holding `decls`.
pub fn session(decls: &[&str]) -> Session {
    init_logging();
    Session::new(Environment::with_decls(decls.iter().copied()))
}

pub fn ident(text: &str) -> Ident {
    Ident::new(text, (0, text.len()))
}

pub fn ident_at(text: &str, offset: usize) -> Ident {
    Ident::new(text, (offset, text.len()))
}

pub fn name(text: &str) -> Name {
    Name::from_dotted(text)
}

pub fn namespace(text: &str) -> Command {
    Command::Namespace(ident(text))
}

pub fn section(text: Option<&str>) -> Command {
    Command::Section(text.map(ident))
}

pub fn end(text: Option<&str>) -> Command {
    Command::End {
        name: text.map(ident),
        span: (0, 3).into(),
    }
}

pub fn open(namespaces: &[&str]) -> Command {
    Command::Open(OpenSyntax::Simple(namespaces.iter().map(|n| ident(n)).collect()))
}

pub fn open_only(namespace: &str, ids: &[&str]) -> Command {
    Command::Open(OpenSyntax::Only {
        namespace: ident(namespace),
        ids: ids.iter().map(|n| ident(n)).collect(),
    })
}

pub fn open_hiding(namespace: &str, ids: &[&str]) -> Command {
    Command::Open(OpenSyntax::Hiding {
        namespace: ident(namespace),
        ids: ids.iter().map(|n| ident(n)).collect(),
    })
}

pub fn open_renaming(namespace: &str, pairs: &[(&str, &str)]) -> Command {
    Command::Open(OpenSyntax::Renaming {
        namespace: ident(namespace),
        pairs: pairs
            .iter()
            .map(|(from, to)| RenamePair {
                from: ident(from),
                to: ident(to),
            })
            .collect(),
    })
}

pub fn open_scoped(namespaces: &[&str]) -> Command {
    Command::Open(OpenSyntax::Scoped(namespaces.iter().map(|n| ident(n)).collect()))
}

pub fn export(namespace: &str, ids: &[&str]) -> Command {
    Command::Export {
        namespace: ident(namespace),
        ids: ids.iter().map(|n| ident(n)).collect(),
    }
}

/// Run every command, failing the test on the first error.
pub fn run(session: &mut Session, commands: &[Command]) {
    for command in commands {
        if let Err(err) = session.elab_command(command) {
            panic!("{:?} failed: {}", command, err);
        }
    }
}

pub fn resolve(session: &Session, id: &str) -> elab_scope::Result<Name> {
    session.resolve(&ident(id))
}

/// Records the namespaces activated by `open scoped` and counts closed scopes.
pub struct ScopedTags {
    pub pops: Rc<Cell<usize>>,
}

impl ScopedTags {
    pub fn tracked() -> (Self, Rc<Cell<usize>>) {
        let pops = Rc::new(Cell::new(0));
        (Self { pops: pops.clone() }, pops)
    }
}

impl ScopedExtension for ScopedTags {
    type State = Vec<Name>;

    fn name(&self) -> &str {
        "scoped_tags"
    }

    fn pop_state(&self, _popped: Self::State) {
        self.pops.set(self.pops.get() + 1);
    }

    fn activate_scoped(&self, state: &mut Self::State, namespace: &Name) {
        state.push(namespace.clone());
    }
}
