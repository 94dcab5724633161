use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ComposeError;
use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Per-thread slot storage backing one composition tree.
///
/// Positional slots are addressed by call order within a pass; keyed slots by
/// an explicit string. Both store `Rc<T>` behind type erasure.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    composing: bool,
}

impl Composer {
    /// Drops every slot. The next pass starts from a freshly mounted tree.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.keyed_slots.clear();
        self.cursor = 0;
    }

    fn slot<T: 'static>(&mut self, init: impl FnOnce() -> T) -> Rc<T> {
        let cursor = self.cursor;
        self.cursor += 1;

        if cursor >= self.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            self.slots.push(Box::new(rc.clone()));
            return rc;
        }

        match self.slots[cursor].downcast_ref::<Rc<T>>() {
            Some(rc) => rc.clone(),
            None => {
                log::warn!(
                    "slot {cursor} changed type between passes; reinitializing. \
                     Conditional composition should use remember_with_key."
                );
                let rc: Rc<T> = Rc::new(init());
                self.slots[cursor] = Box::new(rc.clone());
                rc
            }
        }
    }

    fn keyed_slot<T: 'static>(&mut self, key: String, init: impl FnOnce() -> T) -> Rc<T> {
        if let Some(existing) = self.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            }
            log::warn!("key '{key}' reused with a different type; reinitializing");
        }

        let rc: Rc<T> = Rc::new(init());
        self.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    }
}

/// Slot-based remember (sequential composition only).
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| c.borrow_mut().slot(init))
}

/// Key-based remember.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| c.borrow_mut().keyed_slot(key.into(), init))
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Marks one composition pass: resets the slot cursor on entry and refuses
/// to nest. Cleared on drop, including during unwinding.
pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn enter(scope: Scope) -> Result<Self, ComposeError> {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            if c.composing {
                return Err(ComposeError::AlreadyComposing);
            }
            c.composing = true;
            c.cursor = 0;
            Ok(())
        })?;

        Ok(ComposeGuard { scope })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        COMPOSER.with(|c| c.borrow_mut().composing = false);
    }
}

/// Drives repeated composition passes over one logical component tree.
///
/// Creating a `Recomposer` mounts a fresh tree (the thread's slot storage is
/// cleared); each `compose` call is one synchronous pass over it; dropping
/// the `Recomposer` unmounts the tree and runs scope cleanup. One live
/// `Recomposer` per thread; creating a second abandons the first tree's
/// slots.
pub struct Recomposer {
    root: Scope,
    passes: u64,
}

impl Recomposer {
    pub fn new() -> Self {
        COMPOSER.with(|c| c.borrow_mut().reset());
        Self {
            root: Scope::new(),
            passes: 0,
        }
    }

    pub fn compose<R>(&mut self, build: impl FnOnce() -> R) -> Result<R, ComposeError> {
        let guard = ComposeGuard::enter(self.root.clone())?;
        self.passes += 1;
        log::trace!("composition pass {}", self.passes);
        Ok(guard.scope().run(build))
    }
}

impl Default for Recomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Recomposer {
    fn drop(&mut self) {
        self.root.clone().dispose();
    }
}
