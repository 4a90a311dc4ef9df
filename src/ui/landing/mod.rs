//! Marketing landing page sections.

mod features;
mod footer;
mod hero;
mod navbar;

pub use features::{FEATURES, Feature, features};
pub use footer::footer;
pub use hero::hero;
pub use navbar::{NAV_LINKS, NavLink, navbar};

use crate::ui::components::Icon;

/// Brand mark used by the navbar and footer.
pub(crate) fn brand(class: &str) -> String {
    format!(
        r#"<a href="/home" class="flex items-center gap-2 font-bold text-xl {class}"><div class="h-8 w-8 rounded-lg bg-primary flex items-center justify-center text-primary-foreground">{}</div><span>ilmAI</span></a>"#,
        Icon::BrainCircuit.svg("h-5 w-5")
    )
}
