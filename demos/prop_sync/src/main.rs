use std::rc::Rc;

use anyhow::Result;
use attune_core::deps;
use attune_core::prelude::*;

/// A greeting whose shown name tracks the `name` input, adjusted in-pass
/// rather than through an after-pass effect.
fn greeting(name: Rc<String>) -> String {
    let shown = remember_state(|| (*name).clone());
    let adjustments = remember_state(|| 0u32);

    adjust_state_on_change(
        {
            let shown = shown.clone();
            let adjustments = adjustments.clone();
            let name = name.clone();
            move || {
                log::info!("name changed, adjusting shown state to '{name}'");
                *shown.borrow_mut() = (*name).clone();
                *adjustments.borrow_mut() += 1;
            }
        },
        deps![name.clone()],
    );

    format!("Hello, {}! (adjusted {} times)", *shown.borrow(), *adjustments.borrow())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut recomposer = Recomposer::new();

    let name = Rc::new("Ada".to_string());
    println!("{}", recomposer.compose(|| greeting(name.clone()))?);
    println!("{}", recomposer.compose(|| greeting(name.clone()))?);

    let name = Rc::new("Grace".to_string());
    println!("{}", recomposer.compose(|| greeting(name.clone()))?);

    Ok(())
}
