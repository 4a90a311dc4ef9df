//! Conversation thread.

use crate::chat::{Message, Role};
use crate::ui::components::{BadgeVariant, Icon, badge};
use crate::ui::escape;

const BOT_AVATAR: &str = "h-8 w-8 rounded-full bg-primary/10 border border-primary/20 flex items-center justify-center shrink-0 mt-1 shadow-sm select-none";

fn bubble(message: &Message) -> String {
    let is_user = message.role == Role::User;
    let justify = if is_user { "justify-end" } else { "justify-start" };
    let align = if is_user { "items-end" } else { "items-start" };
    let body_class = if is_user {
        "bg-accent text-foreground px-5 py-3.5 rounded-2xl rounded-tr-sm border border-border/50"
    } else {
        "text-foreground/90 py-2"
    };

    let leading = if is_user {
        String::new()
    } else {
        format!(r#"<div class="{BOT_AVATAR}">{}</div>"#, Icon::Bot.svg("text-primary"))
    };
    let trailing = if is_user {
        format!(
            r#"<div class="h-8 w-8 rounded-full bg-accent border border-border/50 flex items-center justify-center shrink-0 mt-1 shadow-sm select-none">{}</div>"#,
            Icon::User.svg("text-muted-foreground")
        )
    } else {
        String::new()
    };
    let label = match (&message.role, &message.model_label) {
        (Role::Assistant, Some(label)) => badge(
            BadgeVariant::Secondary,
            "model-label text-[10px] px-1.5 py-0.5",
            &escape(label),
        ),
        _ => String::new(),
    };

    format!(
        r#"<div class="message message-{role} flex gap-4 md:gap-6 {justify}">{leading}<div class="flex flex-col gap-1 max-w-[85%] md:max-w-[75%] {align}"><div class="flex items-center gap-2 select-none"><span class="text-[11px] font-medium text-muted-foreground uppercase tracking-wide">{name}</span>{label}</div><div class="text-[15px] leading-relaxed whitespace-pre-wrap shadow-sm {body_class}">{text}</div></div>{trailing}</div>"#,
        role = if is_user { "user" } else { "assistant" },
        name = message.role.display_name(),
        text = escape(&message.text),
    )
}

fn typing_indicator() -> String {
    format!(
        r#"<div class="typing-indicator flex gap-4 md:gap-6 justify-start"><div class="{BOT_AVATAR}">{}</div><div class="flex items-center gap-2"><div class="flex space-x-1"><div class="w-2 h-2 bg-primary/40 rounded-full animate-bounce [animation-delay:-0.3s]"></div><div class="w-2 h-2 bg-primary/40 rounded-full animate-bounce [animation-delay:-0.15s]"></div><div class="w-2 h-2 bg-primary/40 rounded-full animate-bounce"></div></div></div></div>"#,
        Icon::Bot.svg("text-primary")
    )
}

/// Render messages in order, followed by a typing indicator while loading.
#[must_use]
pub fn message_list(messages: &[Message], loading: bool) -> String {
    let mut items: String = messages.iter().map(bubble).collect();
    if loading {
        items.push_str(&typing_indicator());
    }
    format!(
        r#"<div id="chat-thread" class="flex-1 overflow-y-auto p-4 md:p-0 pt-24 pb-32 scroll-smooth"><div class="max-w-3xl mx-auto w-full px-4 md:px-0 space-y-8">{items}</div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_order_with_labels() {
        let html = message_list(
            &[
                Message::user("What is Zakat?"),
                Message::assistant("Zakat is...", "IlmAI Fast"),
            ],
            false,
        );
        let user = html.find("What is Zakat?").unwrap();
        let reply = html.find("Zakat is...").unwrap();
        assert!(user < reply);
        assert!(html.contains(r#"px-1.5 py-0.5">IlmAI Fast</span>"#));
        assert!(html.contains(">You</span>"));
        assert!(!html.contains("typing-indicator"));
    }

    #[test]
    fn escapes_message_text() {
        let html = message_list(&[Message::user("<b>bold</b>")], false);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn shows_indicator_while_loading() {
        let html = message_list(&[Message::user("hi")], true);
        assert!(html.contains("typing-indicator"));
    }
}
