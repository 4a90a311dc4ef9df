//! Dropdown menus.
//!
//! Menus are `<details>` disclosures, so they open and close without
//! JavaScript. Entries are given as a list; selectable entries are buttons
//! inside a form so choosing one is an ordinary post.

use super::icons::Icon;

/// One row of a dropdown menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry<'a> {
    /// Small muted heading.
    Label(&'a str),
    /// Horizontal rule.
    Separator,
    /// Clickable row.
    Item(MenuItem<'a>),
}

/// A clickable menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuItem<'a> {
    pub title: &'a str,
    /// Second line under the title.
    pub description: Option<&'a str>,
    pub icon: Option<Icon>,
    /// Form field submitted when chosen, as `(name, value)`.
    pub value: Option<(&'a str, &'a str)>,
    /// Highlight as the current choice.
    pub active: bool,
    /// Red destructive styling.
    pub destructive: bool,
}

/// Where a menu posts its choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuTarget<'a> {
    /// Form action.
    pub action: &'a str,
    /// Extra raw form attributes (HTMX wiring).
    pub attrs: &'a str,
}

fn item(entry: &MenuItem<'_>) -> String {
    let icon = entry
        .icon
        .map(|icon| icon.svg("mr-2 opacity-70"))
        .unwrap_or_default();
    let title_class = match (entry.destructive, entry.active) {
        (true, _) => "text-red-500",
        (false, true) => "font-medium text-primary",
        (false, false) => "font-medium",
    };
    let description = entry
        .description
        .map(|d| format!(r#"<span class="text-xs text-muted-foreground">{d}</span>"#))
        .unwrap_or_default();
    let (name, value) = entry.value.map_or((String::new(), String::new()), |(n, v)| {
        (format!(r#" name="{n}""#), format!(r#" value="{v}""#))
    });
    let button_type = if entry.value.is_some() { "submit" } else { "button" };

    format!(
        r#"<button type="{button_type}"{name}{value} class="w-full flex items-center rounded-lg px-2 py-2 text-sm text-left hover:bg-accent focus:bg-accent cursor-pointer">{icon}<span class="flex flex-col gap-0.5"><span class="{title_class}">{}</span>{description}</span></button>"#,
        entry.title
    )
}

/// Render a dropdown with `trigger` as its summary.
#[must_use]
pub fn dropdown(trigger: &str, entries: &[MenuEntry<'_>], target: MenuTarget<'_>, class: &str) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Label(text) => {
                format!(r#"<div class="text-xs text-muted-foreground px-2 py-1.5">{text}</div>"#)
            }
            MenuEntry::Separator => r#"<div role="separator" class="-mx-1 my-1 h-px bg-border"></div>"#.to_string(),
            MenuEntry::Item(it) => item(it),
        })
        .collect();

    format!(
        r#"<details class="relative group {class}"><summary class="list-none cursor-pointer">{trigger}</summary><form method="post" action="{}" {} class="absolute z-50 mt-2 p-1 rounded-xl border border-border/50 shadow-xl bg-card/95 backdrop-blur-xl">{rows}</form></details>"#,
        target.action, target.attrs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectable_items_submit_their_value() {
        let html = dropdown(
            "Mode",
            &[
                MenuEntry::Label("Models"),
                MenuEntry::Item(MenuItem {
                    title: "IlmAI Fast",
                    value: Some(("mode", "fast")),
                    active: true,
                    ..MenuItem::default()
                }),
                MenuEntry::Separator,
                MenuEntry::Item(MenuItem {
                    title: "Log out",
                    destructive: true,
                    ..MenuItem::default()
                }),
            ],
            MenuTarget {
                action: "/chat/mode",
                attrs: "",
            },
            "",
        );
        assert!(html.contains(r#"action="/chat/mode""#));
        assert!(html.contains(r#"type="submit" name="mode" value="fast""#));
        assert!(html.contains(r#"<button type="button" class="#));
        assert!(html.contains("text-red-500"));
    }
}
