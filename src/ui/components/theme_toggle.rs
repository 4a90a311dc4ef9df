//! Light/dark toggle.

use super::button::{Button, ButtonSize, ButtonVariant};
use super::icons::Icon;
use crate::ui::Theme;

/// Form that flips the theme and returns to `return_to`.
///
/// Shows a sun in dark mode and a moon in light mode.
#[must_use]
pub fn theme_toggle(theme: Theme, return_to: &str, class: &str) -> String {
    let icon = match theme {
        Theme::Dark => Icon::Sun,
        Theme::Light => Icon::Moon,
    };
    let button = Button {
        variant: ButtonVariant::Ghost,
        size: ButtonSize::Icon,
        button_type: "submit",
        class,
        ..Button::default()
    }
    .render(&format!(
        r#"{}<span class="sr-only">Toggle theme</span>"#,
        icon.svg("")
    ));

    format!(
        r#"<form method="post" action="/theme"><input type="hidden" name="return_to" value="{return_to}">{button}</form>"#
    )
}
