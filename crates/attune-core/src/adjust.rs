use std::cell::RefCell;

use crate::dep::DepList;
use crate::runtime::{remember, remember_with_key};

/// Runs `f` during the current pass when `deps` differs from the list seen
/// on the previous pass.
///
/// The first pass for a call site only records the list; nothing has changed
/// yet relative to it. Afterwards the lists are compared positionally by
/// identity (`Dep::same`), and on any difference `f` runs synchronously, to
/// completion, before this function returns, so state it writes is visible
/// later in the same pass. The stored list is overwritten with `deps` on
/// every pass, changed or not.
///
/// Slot-based, like `remember`: call it unconditionally and in the same
/// order every pass. Use `adjust_state_on_change_with_key` under conditional
/// composition.
pub fn adjust_state_on_change(f: impl FnOnce(), deps: DepList) {
    let prev = remember(|| RefCell::new(None::<DepList>));
    adjust_in_slot(&prev, f, deps);
}

/// Key-based variant, stable across conditional branches.
pub fn adjust_state_on_change_with_key(key: impl Into<String>, f: impl FnOnce(), deps: DepList) {
    let prev = remember_with_key(format!("adjust:{}", key.into()), || {
        RefCell::new(None::<DepList>)
    });
    adjust_in_slot(&prev, f, deps);
}

fn adjust_in_slot(slot: &RefCell<Option<DepList>>, f: impl FnOnce(), deps: DepList) {
    let changed = match slot.borrow().as_ref() {
        None => false,
        Some(stored) => deps_changed(stored, &deps),
    };

    // Callback runs with the slot unborrowed; it may re-enter other hooks.
    if changed {
        f();
    }
    *slot.borrow_mut() = Some(deps);
}

fn deps_changed(stored: &DepList, next: &DepList) -> bool {
    if stored.len() != next.len() {
        log::warn!(
            "dependency count changed between passes ({} -> {}); treating as changed",
            stored.len(),
            next.len()
        );
        return true;
    }
    stored.iter().zip(next.iter()).any(|(prev, next)| !prev.same(next))
}
