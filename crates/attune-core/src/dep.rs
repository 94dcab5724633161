use std::any::Any;
use std::rc::Rc;

use smallvec::SmallVec;

/// One tracked input of an adjustment hook.
///
/// Two `Dep`s are *same* iff they point at the same allocation. The
/// comparison is intentionally shallow: a value rebuilt every pass reads as
/// changed even when it is equal, and a shared `Rc` cloned every pass reads
/// as unchanged even after interior mutation.
#[derive(Clone)]
pub struct Dep(Rc<dyn Any>);

impl Dep {
    /// Wraps a fresh allocation. Compares as changed against every other
    /// `Dep`, including another `Dep::new` of an equal value.
    pub fn new<T: 'static>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an existing allocation. Clones of the same `Rc` compare as
    /// unchanged across passes.
    pub fn shared<T: 'static>(value: Rc<T>) -> Self {
        Self(value)
    }

    pub fn same(&self, other: &Dep) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Ordered dependency list. Inline up to four entries; hooks rarely track
/// more.
pub type DepList = SmallVec<[Dep; 4]>;

/// Builds a `DepList` from `Rc` expressions: `deps![name.clone(), id.clone()]`.
#[macro_export]
macro_rules! deps {
    () => {
        $crate::dep::DepList::new()
    };
    ($($dep:expr),+ $(,)?) => {{
        let mut list = $crate::dep::DepList::new();
        $( list.push($crate::dep::Dep::shared($dep)); )+
        list
    }};
}
