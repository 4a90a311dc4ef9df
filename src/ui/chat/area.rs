//! Main chat area: mode picker, thread, input.

use super::{input_area, message_list, mode_icon, swap_chat_area};
use crate::chat::{ChatSnapshot, Mode, Notification};
use crate::ui::ViewContext;
use crate::ui::components::{Icon, MenuEntry, MenuItem, MenuTarget, dropdown, theme_toggle, toast};

/// Element id of the swappable chat area.
pub const CHAT_AREA_ID: &str = "chat-area";

/// How often a loading chat area re-fetches itself.
pub const POLL_INTERVAL_MS: u64 = 800;

fn mode_picker(active: Mode) -> String {
    let trigger = format!(
        r#"<span class="flex items-center gap-2 text-lg font-medium px-3 py-2 rounded-lg hover:bg-accent"><span class="text-muted-foreground">Mode:</span><span class="text-primary font-semibold">{}</span>{}</span>"#,
        active.label(),
        Icon::ChevronDown.svg("h-4 w-4 opacity-50")
    );

    let mut entries = vec![MenuEntry::Label("Select Model")];
    entries.extend(Mode::MODELS.iter().map(|mode| {
        MenuEntry::Item(MenuItem {
            title: mode.label(),
            description: Some(mode.description()),
            icon: Some(mode_icon(*mode)),
            value: Some(("mode", mode.slug())),
            active: *mode == active,
            destructive: false,
        })
    }));

    let attrs = swap_chat_area("/chat/mode");
    dropdown(
        &trigger,
        &entries,
        MenuTarget {
            action: "/chat/mode",
            attrs: &attrs,
        },
        "w-fit",
    )
}

/// The chat area for `snapshot`.
///
/// While a reply is outstanding the fragment polls `/chat/area` and replaces
/// itself, so the reply appears without a full page load.
#[must_use]
pub fn chat_area(ctx: ViewContext, snapshot: &ChatSnapshot, notification: Option<&Notification>) -> String {
    let poll = if snapshot.loading {
        format!(r#" hx-get="/chat/area" hx-trigger="every {POLL_INTERVAL_MS}ms" hx-swap="outerHTML""#)
    } else {
        String::new()
    };
    let toast = notification.map(toast).unwrap_or_default();

    format!(
        r#"<main id="{CHAT_AREA_ID}" class="flex-1 flex flex-col relative h-full bg-background"{poll}><div class="absolute top-0 left-0 right-0 h-16 flex items-center justify-between px-4 z-20">{picker}<div class="flex items-center gap-2">{toggle}</div></div>{thread}{input}{toast}</main>"#,
        picker = mode_picker(snapshot.mode),
        toggle = theme_toggle(ctx.theme, "/", "rounded-full"),
        thread = message_list(&snapshot.messages, snapshot.loading),
        input = input_area(snapshot),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Message;
    use crate::ui::Theme;

    fn snapshot(loading: bool) -> ChatSnapshot {
        ChatSnapshot {
            messages: vec![Message::user("Salam")],
            input: String::new(),
            loading,
            mode: Mode::Scholar,
        }
    }

    #[test]
    fn polls_only_while_loading() {
        let ctx = ViewContext::new(Theme::Dark, Mode::Scholar);
        assert!(chat_area(ctx, &snapshot(true), None).contains(r#"hx-trigger="every 800ms""#));
        assert!(!chat_area(ctx, &snapshot(false), None).contains("hx-get="));
    }

    #[test]
    fn picker_lists_models_and_shows_active_label() {
        let ctx = ViewContext::new(Theme::Dark, Mode::Scholar);
        let html = chat_area(ctx, &snapshot(false), None);
        assert!(html.contains(r#"<span class="text-primary font-semibold">Scholar Mode</span>"#));
        assert!(html.contains(r#"value="pro""#));
        assert!(html.contains(r#"value="fast""#));
        assert!(html.contains("Best for complex reasoning"));
    }

    #[test]
    fn renders_toast_when_given() {
        let ctx = ViewContext::default();
        let failure = Notification::connection_failed();
        let html = chat_area(ctx, &snapshot(false), Some(&failure));
        assert!(html.contains(r#"role="alert""#));
        assert!(!chat_area(ctx, &snapshot(false), None).contains(r#"role="alert""#));
    }
}
