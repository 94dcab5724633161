//! # Slots, deps, and in-pass state adjustment
//!
//! Attune is a small slot-based composition runtime with one headline hook:
//! adjust a component's remembered state *during* the composition pass when
//! one of its inputs changes, instead of waiting for a post-pass effect.
//! There are three main pieces:
//!
//! - `remember*`: positional/keyed storage bound to the composition tree.
//! - `Dep` / `deps![]`: tracked inputs, compared by identity.
//! - `adjust_state_on_change`: the in-pass adjustment hook.
//!
//! ## Remembered state
//!
//! The Nth `remember` call in a pass always refers to the Nth stored value,
//! so state survives recomposition:
//!
//! ```rust
//! use attune_core::prelude::*;
//!
//! let mut recomposer = Recomposer::new();
//!
//! for expected in 1u32..=3 {
//!     let seen = recomposer
//!         .compose(|| {
//!             let count = remember_state(|| 0u32);
//!             *count.borrow_mut() += 1;
//!             *count.borrow()
//!         })
//!         .unwrap();
//!     assert_eq!(seen, expected);
//! }
//! ```
//!
//! `remember` and `remember_state` are order-based; `remember_with_key` and
//! `remember_state_with_key` are key-based and more stable across
//! conditional branches.
//!
//! ## Adjusting state when an input changes
//!
//! `adjust_state_on_change(f, deps)` runs `f` synchronously, inside the
//! current pass, whenever the dependency list differs from the one seen on
//! the previous pass. The first pass only records the list:
//!
//! ```rust
//! use attune_core::prelude::*;
//! use attune_core::deps;
//! use std::rc::Rc;
//!
//! fn greeting(name: Rc<String>) -> String {
//!     let shown = remember_state(|| (*name).clone());
//!     let adjustments = remember_state(|| 0u32);
//!
//!     adjust_state_on_change(
//!         {
//!             let shown = shown.clone();
//!             let adjustments = adjustments.clone();
//!             let name = name.clone();
//!             move || {
//!                 *shown.borrow_mut() = (*name).clone();
//!                 *adjustments.borrow_mut() += 1;
//!             }
//!         },
//!         deps![name.clone()],
//!     );
//!
//!     format!("{} {}", *shown.borrow(), *adjustments.borrow())
//! }
//!
//! let mut recomposer = Recomposer::new();
//!
//! let first = Rc::new("init".to_string());
//! assert_eq!(recomposer.compose(|| greeting(first.clone())).unwrap(), "init 0");
//! assert_eq!(recomposer.compose(|| greeting(first.clone())).unwrap(), "init 0");
//!
//! let second = Rc::new("rerender".to_string());
//! assert_eq!(recomposer.compose(|| greeting(second.clone())).unwrap(), "rerender 1");
//! ```
//!
//! Deps are compared by allocation identity, never by value: clone the same
//! `Rc` across passes for an input that should read as unchanged. Because the
//! adjustment runs before the pass produces its output, the adjusted state is
//! already visible in the same pass; no second pass is needed.
//!
//! ## Teardown
//!
//! Cleanup registered through `scoped_effect` runs when the owning tree goes
//! away:
//!
//! ```rust
//! use attune_core::prelude::*;
//!
//! let mut recomposer = Recomposer::new();
//! recomposer
//!     .compose(|| {
//!         scoped_effect(|| {
//!             log::info!("mounted");
//!             Box::new(|| log::info!("unmounted"))
//!         });
//!     })
//!     .unwrap();
//! drop(recomposer); // runs the cleanup
//! ```

pub mod adjust;
pub mod dep;
pub mod error;
pub mod prelude;
pub mod runtime;
pub mod scope;

pub use adjust::*;
pub use dep::*;
pub use error::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
