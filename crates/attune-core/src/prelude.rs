pub use crate::adjust::{adjust_state_on_change, adjust_state_on_change_with_key};
pub use crate::dep::{Dep, DepList};
pub use crate::error::ComposeError;
pub use crate::runtime::{
    ComposeGuard, Recomposer, remember, remember_state, remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
