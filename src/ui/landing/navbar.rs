//! Top navigation bar.

use super::brand;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Icon};

/// A navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "/home", label: "Home" },
    NavLink { href: "/features", label: "Features" },
    NavLink { href: "/pricing", label: "Pricing" },
    NavLink { href: "/dashboard", label: "Dashboard" },
];

/// Navbar with the link matching `current` highlighted.
#[must_use]
pub fn navbar(current: &str) -> String {
    let desktop: String = NAV_LINKS
        .iter()
        .map(|link| {
            let color = if link.href == current {
                "text-primary"
            } else {
                "text-muted-foreground"
            };
            format!(
                r#"<a href="{}" class="text-sm font-medium transition-colors hover:text-primary {color}">{}</a>"#,
                link.href, link.label
            )
        })
        .collect();
    let mobile: String = NAV_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="text-lg font-medium hover:text-primary transition-colors">{}</a>"#,
                link.href, link.label
            )
        })
        .collect();
    let get_started = Button {
        size: ButtonSize::Sm,
        ..Button::default()
    }
    .render("Get Started");
    let get_started_wide = Button {
        class: "w-full mt-4",
        ..Button::default()
    }
    .render("Get Started");

    format!(
        r#"<nav class="sticky top-0 z-50 w-full border-b border-border/40 bg-background/95 backdrop-blur"><div class="container flex h-16 items-center justify-between px-4 md:px-6">{brand}<div class="hidden md:flex gap-6 items-center">{desktop}{get_started}</div><details class="md:hidden"><summary class="list-none cursor-pointer {ghost} h-10 w-10 inline-flex items-center justify-center rounded-md">{menu}</summary><div class="fixed inset-y-0 right-0 z-50 w-[300px] sm:w-[400px] p-6 bg-background border-l"><div class="flex flex-col gap-4 mt-8">{mobile}{get_started_wide}</div></div></details></div></nav>"#,
        brand = brand(""),
        ghost = ButtonVariant::Ghost.classes(),
        menu = Icon::Menu.svg("h-5 w-5"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_current_link() {
        let html = navbar("/dashboard");
        assert!(html.contains(r#"<a href="/dashboard" class="text-sm font-medium transition-colors hover:text-primary text-primary">"#));
        assert!(html.contains(r#"<a href="/home" class="text-sm font-medium transition-colors hover:text-primary text-muted-foreground">"#));
    }
}
