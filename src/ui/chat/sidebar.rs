//! Desktop sidebar.

use super::mode_buttons;
use crate::chat::Mode;
use crate::ui::components::{
    Button, ButtonVariant, Icon, MenuEntry, MenuItem, MenuTarget, SeparatorOrientation, avatar, dropdown,
    separator,
};

/// Titles in the "Recent" list. The list is static placeholder content.
pub const RECENT_CHATS: [&str; 7] = [
    "Meaning of Surah Al-Fatiha",
    "Prayer times in London",
    "How to perform Wudu",
    "History of Mecca",
    "Zakat calculation help",
    "Understanding Ramadan",
    "Islamic finance basics",
];

fn recent_list() -> String {
    RECENT_CHATS
        .iter()
        .map(|title| {
            format!(
                r#"<div class="group flex items-center gap-2 w-full rounded-md hover:bg-accent pr-2"><button type="button" class="flex-1 flex items-center gap-2 h-9 px-3 text-sm text-muted-foreground group-hover:text-foreground truncate">{icon}<span class="truncate">{title}</span></button><div class="flex items-center opacity-0 group-hover:opacity-100 gap-0.5"><button type="button" title="Rename" class="h-6 w-6 inline-flex items-center justify-center rounded-md">{rename}</button><button type="button" title="Delete" class="h-6 w-6 inline-flex items-center justify-center rounded-md hover:text-red-400">{delete}</button></div></div>"#,
                icon = Icon::MessageSquare.svg("opacity-50 shrink-0"),
                rename = Icon::Pencil.svg("h-3 w-3"),
                delete = Icon::Trash.svg("h-3 w-3"),
            )
        })
        .collect()
}

fn account_menu() -> String {
    let trigger = format!(
        r#"<span class="w-full flex items-center justify-start gap-3 px-2 h-12 rounded-md hover:bg-accent">{}<span class="flex flex-col items-start text-sm"><span class="font-medium">Abdullah User</span><span class="text-xs text-muted-foreground">Free Plan</span></span>{}</span>"#,
        avatar("AU", "h-8 w-8 border border-border"),
        Icon::MoreHorizontal.svg("ml-auto h-4 w-4 text-muted-foreground"),
    );
    let entries = [
        MenuEntry::Label("My Account"),
        MenuEntry::Separator,
        MenuEntry::Item(MenuItem {
            title: "Upgrade to Pro",
            icon: Some(Icon::Sparkles),
            ..MenuItem::default()
        }),
        MenuEntry::Item(MenuItem {
            title: "Settings",
            icon: Some(Icon::Settings),
            ..MenuItem::default()
        }),
        MenuEntry::Item(MenuItem {
            title: "Billing",
            icon: Some(Icon::CreditCard),
            ..MenuItem::default()
        }),
        MenuEntry::Separator,
        MenuEntry::Item(MenuItem {
            title: "Log out",
            icon: Some(Icon::LogOut),
            destructive: true,
            ..MenuItem::default()
        }),
    ];
    dropdown(&trigger, &entries, MenuTarget::default(), "w-full")
}

/// Sidebar with new chat, persona modes, recent chats and the account menu.
#[must_use]
pub fn sidebar() -> String {
    let new_chat = Button {
        variant: ButtonVariant::Solid,
        button_type: "submit",
        class: "w-full justify-start shadow-sm",
        ..Button::default()
    }
    .render(&format!("{}New Chat", Icon::Plus.svg("h-4 w-4")));

    format!(
        r#"<aside class="hidden md:flex flex-col h-full w-64 bg-sidebar border-r border-border"><div class="p-4 flex items-center gap-2"><div class="h-8 w-8 rounded-lg bg-primary/10 flex items-center justify-center">{bot}</div><span class="font-semibold text-lg tracking-tight">IlmAI</span></div><div class="px-3 pb-2"><form method="post" action="/chat/new">{new_chat}</form></div><div class="flex-1 overflow-y-auto px-3"><div class="space-y-6 py-2"><div><h3 class="text-xs font-semibold text-muted-foreground mb-2 px-2 uppercase tracking-wider">Assistant Modes</h3>{modes}</div>{rule}<div><h3 class="text-xs font-semibold text-muted-foreground mb-2 px-2 uppercase tracking-wider">Recent</h3><div class="space-y-0.5">{recent}</div></div></div></div><div class="p-3 border-t border-border">{account}</div></aside>"#,
        bot = Icon::Bot.svg("h-5 w-5 text-primary"),
        modes = mode_buttons(
            &Mode::PERSONAS,
            "w-full flex items-center gap-2 h-9 px-3 rounded-md text-sm text-muted-foreground hover:text-foreground hover:bg-accent"
        ),
        rule = separator(SeparatorOrientation::Horizontal, "opacity-50"),
        recent = recent_list(),
        account = account_menu(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_personas_and_recent_chats() {
        let html = sidebar();
        for mode in Mode::PERSONAS {
            assert!(html.contains(&format!(r#"name="mode" value="{}""#, mode.slug())));
        }
        for title in RECENT_CHATS {
            assert!(html.contains(title));
        }
        assert!(html.contains(r#"action="/chat/new""#));
        assert!(html.contains("Log out"));
    }
}
