//! Chat input area.

use super::swap_chat_area;
use crate::chat::ChatSnapshot;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Icon};
use crate::ui::escape;

/// Decorative tool buttons: icon and tooltip.
const TOOLS: [(Icon, &str); 3] = [
    (Icon::Paperclip, "Attach"),
    (Icon::Image, "Image"),
    (Icon::Globe, "Search"),
];

/// Message form. Disabled while a reply is outstanding.
///
/// Enter submits, Shift+Enter inserts a newline.
#[must_use]
pub fn input_area(snapshot: &ChatSnapshot) -> String {
    let disabled = if snapshot.loading { " disabled" } else { "" };

    let tools: String = TOOLS
        .iter()
        .map(|(icon, tip)| {
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                class: "h-8 w-8 text-muted-foreground rounded-lg",
                attrs: &format!(r#"title="{tip}" aria-label="{tip}""#),
                ..Button::default()
            }
            .render(&icon.svg(""))
        })
        .collect();

    let send_class = if snapshot.loading {
        "h-7 w-7 rounded-lg shadow-sm bg-muted text-muted-foreground cursor-not-allowed"
    } else {
        "h-7 w-7 rounded-lg shadow-sm"
    };
    let send = Button {
        size: ButtonSize::Icon,
        button_type: "submit",
        disabled: snapshot.loading,
        class: send_class,
        attrs: r#"aria-label="Send""#,
        ..Button::default()
    }
    .render(&Icon::Send.svg("h-3.5 w-3.5"));

    format!(
        r#"<div class="absolute bottom-0 left-0 right-0 p-4 pt-12 z-20"><div class="max-w-3xl mx-auto"><form method="post" action="/chat/messages" {swap} hx-trigger="submit, keydown[key=='Enter'&&!shiftKey] from:find textarea" class="relative bg-card/80 border border-border/50 rounded-2xl shadow-lg overflow-hidden"><textarea name="message" rows="2" required placeholder="{placeholder}" class="min-h-[52px] max-h-[200px] w-full resize-none border-0 bg-transparent px-4 py-3.5 text-base"{disabled}>{input}</textarea><div class="flex justify-between items-center px-2 pb-2"><div class="flex items-center gap-0.5">{tools}</div><div class="flex items-center gap-2">{send}</div></div></form><p class="text-[10px] text-center text-muted-foreground/70 mt-3 select-none">IlmAI can make mistakes. Please verify important Islamic information.</p></div></div>"#,
        swap = swap_chat_area("/chat/messages"),
        placeholder = escape(&snapshot.placeholder()),
        input = escape(&snapshot.input),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Mode;

    fn snapshot(loading: bool, input: &str) -> ChatSnapshot {
        ChatSnapshot {
            messages: Vec::new(),
            input: input.to_string(),
            loading,
            mode: Mode::Fast,
        }
    }

    #[test]
    fn placeholder_names_active_mode() {
        let html = input_area(&snapshot(false, ""));
        assert!(html.contains(r#"placeholder="Message IlmAI (IlmAI Fast)...""#));
        assert!(!html.contains(" disabled>"));
    }

    #[test]
    fn send_enabled_for_empty_draft_when_idle() {
        // Without script the page cannot see typing, so an empty draft must
        // still leave the form submittable.
        let html = input_area(&snapshot(false, ""));
        assert!(html.contains(r#"aria-label="Send">"#));
        assert!(html.contains(r#"<textarea name="message" rows="2" required"#));
    }

    #[test]
    fn disabled_while_loading() {
        let html = input_area(&snapshot(true, "draft"));
        assert!(html.contains(r#" disabled>draft</textarea>"#));
        assert!(html.contains(r#"aria-label="Send" disabled>"#));
    }
}
