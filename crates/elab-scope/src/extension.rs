//! Scoped extensions: per-subsystem state that nests with lexical scopes.
//!
//! Subsystems that need their own state to follow `namespace`/`section`/`end`
//! (scoped attributes, notations, instances) register a [`ScopedExtension`].
//! The registry keeps one state per open scope for each extension and moves
//! every slot in lock-step with the [`ScopeStack`](crate::ScopeStack): a push
//! duplicates the top state, a pop discards the top `n` states, and
//! `open scoped A` lets each extension activate the entries tagged `A`.
//!
//! The registry never looks inside a state; it only calls the hooks.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::name::Name;

/// The hooks a subsystem provides to nest its state with lexical scopes.
pub trait ScopedExtension: 'static {
    type State: Clone + 'static;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// State for a newly entered scope, derived from the enclosing scope's.
    fn push_state(&self, top: &Self::State) -> Self::State {
        top.clone()
    }

    /// Called with the state of each scope as it is closed, innermost first.
    fn pop_state(&self, _popped: Self::State) {}

    /// Activate the entries tagged with `namespace` in the innermost state.
    fn activate_scoped(&self, state: &mut Self::State, namespace: &Name);
}

/// Typed handle returned by [`ScopeStack::register_extension`](crate::ScopeStack::register_extension).
pub struct ExtensionId<E> {
    index: usize,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Clone for ExtensionId<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ExtensionId<E> {}

impl<E> fmt::Debug for ExtensionId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExtensionId").field(&self.index).finish()
    }
}

// Object-safe view of an `ExtensionSlot<E>`.
trait ErasedSlot {
    fn name(&self) -> &str;
    fn depth(&self) -> usize;
    fn push(&mut self);
    fn pop(&mut self, n: usize);
    fn activate_scoped(&mut self, namespace: &Name);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct ExtensionSlot<E: ScopedExtension> {
    extension: E,
    /// Outermost scope first; never empty.
    states: Vec<E::State>,
}

impl<E: ScopedExtension> ErasedSlot for ExtensionSlot<E> {
    fn name(&self) -> &str {
        self.extension.name()
    }

    fn depth(&self) -> usize {
        self.states.len()
    }

    fn push(&mut self) {
        if let Some(top) = self.states.last() {
            let next = self.extension.push_state(top);
            self.states.push(next);
        }
    }

    fn pop(&mut self, n: usize) {
        for _ in 0..n {
            if let Some(popped) = self.states.pop() {
                self.extension.pop_state(popped);
            }
        }
    }

    fn activate_scoped(&mut self, namespace: &Name) {
        if let Some(top) = self.states.last_mut() {
            self.extension.activate_scoped(top, namespace);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// All registered scoped extensions and their per-scope state stacks.
#[derive(Default)]
pub struct ExtensionRegistry {
    slots: Vec<Box<dyn ErasedSlot>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extension`, seeding its slot with `depth` copies of `initial`
    /// so that it lines up with a scope stack of that depth.
    pub(crate) fn register<E: ScopedExtension>(
        &mut self,
        extension: E,
        initial: E::State,
        depth: usize,
    ) -> ExtensionId<E> {
        log::debug!("registering scoped extension `{}` at depth {}", extension.name(), depth);
        let slot = ExtensionSlot {
            extension,
            states: vec![initial; depth.max(1)],
        };
        self.slots.push(Box::new(slot));
        ExtensionId {
            index: self.slots.len() - 1,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot depth of every extension, in registration order.
    pub fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().map(|slot| slot.depth())
    }

    pub(crate) fn push_all(&mut self) {
        for slot in &mut self.slots {
            slot.push();
        }
    }

    pub(crate) fn pop_all(&mut self, n: usize) {
        for slot in &mut self.slots {
            slot.pop(n);
        }
    }

    pub(crate) fn activate_scoped(&mut self, namespace: &Name) {
        for slot in &mut self.slots {
            log::trace!("activating scoped entries of `{}` in `{}`", namespace, slot.name());
            slot.activate_scoped(namespace);
        }
    }

    fn slot<E: ScopedExtension>(&self, id: ExtensionId<E>) -> Option<&ExtensionSlot<E>> {
        self.slots.get(id.index)?.as_any().downcast_ref()
    }

    /// The innermost state of an extension.
    pub fn state<E: ScopedExtension>(&self, id: ExtensionId<E>) -> Option<&E::State> {
        self.slot(id)?.states.last()
    }

    /// Every state of an extension, outermost scope first.
    pub fn states<E: ScopedExtension>(&self, id: ExtensionId<E>) -> Option<&[E::State]> {
        self.slot(id).map(|slot| slot.states.as_slice())
    }

    /// Mutable access to the innermost state, for the extension's owner.
    pub fn state_mut<E: ScopedExtension>(&mut self, id: ExtensionId<E>) -> Option<&mut E::State> {
        self.slots
            .get_mut(id.index)?
            .as_any_mut()
            .downcast_mut::<ExtensionSlot<E>>()?
            .states
            .last_mut()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| (slot.name(), slot.depth())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tags;

    impl ScopedExtension for Tags {
        type State = Vec<Name>;

        fn name(&self) -> &str {
            "tags"
        }

        fn activate_scoped(&self, state: &mut Self::State, namespace: &Name) {
            state.push(namespace.clone());
        }
    }

    #[test]
    fn push_duplicates_and_pop_restores() {
        let mut registry = ExtensionRegistry::new();
        let id = registry.register(Tags, Vec::new(), 1);

        registry.push_all();
        registry.activate_scoped(&Name::from_dotted("A"));
        assert_eq!(registry.state(id), Some(&vec![Name::from_dotted("A")]));
        assert_eq!(registry.states(id).map(<[_]>::len), Some(2));

        registry.pop_all(1);
        assert_eq!(registry.state(id), Some(&Vec::new()));
        assert_eq!(registry.depths().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn late_registration_matches_depth() {
        let mut registry = ExtensionRegistry::new();
        let id = registry.register(Tags, vec![Name::from_dotted("Root")], 3);
        assert_eq!(registry.states(id).map(<[_]>::len), Some(3));
        if let Some(state) = registry.state_mut(id) {
            state.clear();
        }
        assert_eq!(registry.state(id), Some(&Vec::new()));
    }
}
