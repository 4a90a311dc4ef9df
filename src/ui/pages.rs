//! Full pages.

use super::chat::{chat_area, mobile_header, sidebar};
use super::landing::{features, footer, hero, navbar};
use super::{Theme, ViewContext, dashboard, document};
use crate::chat::{ChatSnapshot, Notification};

/// Chat page: header, sidebar and chat area.
#[must_use]
pub fn chat_page(ctx: ViewContext, snapshot: &ChatSnapshot, notification: Option<&Notification>) -> String {
    let body = format!(
        r#"<div class="flex flex-col h-screen bg-background text-foreground">{header}<div class="flex flex-1 overflow-hidden">{sidebar}{area}</div></div>"#,
        header = mobile_header(ctx),
        sidebar = sidebar(),
        area = chat_area(ctx, snapshot, notification),
    );
    document("Chat", ctx.theme, &body)
}

/// Landing page with `current` marking the active nav link.
#[must_use]
pub fn landing_page(theme: Theme, current: &str) -> String {
    let body = format!(
        r#"<div class="min-h-screen flex flex-col">{}<main class="flex-1">{}{}</main>{}</div>"#,
        navbar(current),
        hero(),
        features(),
        footer()
    );
    document("Home", theme, &body)
}

#[must_use]
pub fn dashboard_page(theme: Theme) -> String {
    document("Dashboard", theme, &dashboard::dashboard())
}

#[must_use]
pub fn not_found_page(theme: Theme) -> String {
    document(
        "Not Found",
        theme,
        r#"<div class="min-h-screen flex flex-col items-center justify-center gap-4"><h1 class="text-4xl font-bold">404</h1><p class="text-muted-foreground">This page does not exist.</p><a href="/" class="text-primary hover:underline">Back to chat</a></div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Message, Mode};

    #[test]
    fn chat_page_has_all_regions() {
        let snapshot = ChatSnapshot {
            messages: vec![Message::assistant("As-salamu alaykum!", "IlmAI Pro")],
            input: String::new(),
            loading: false,
            mode: Mode::Pro,
        };
        let html = chat_page(ViewContext::new(Theme::Light, Mode::Pro), &snapshot, None);
        assert!(html.contains(r#"class="light""#));
        assert!(html.contains(r#"id="chat-area""#));
        assert!(html.contains("Assistant Modes"));
        assert!(html.contains("As-salamu alaykum!"));
    }

    #[test]
    fn landing_page_lists_features() {
        let html = landing_page(Theme::Dark, "/home");
        assert!(html.contains("Features that matter"));
        assert!(html.contains("Intuitive UX"));
        assert!(html.contains("ilmAI Inc."));
    }
}
