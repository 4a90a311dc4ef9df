//! Chat page views.
//!
//! The chat area is the unit HTMX swaps: every chat interaction answers with
//! a fresh `#chat-area`, and while a reply is outstanding that fragment polls
//! itself until the session settles.

mod area;
mod header;
mod input_area;
mod message_list;
mod sidebar;

pub use area::{CHAT_AREA_ID, POLL_INTERVAL_MS, chat_area};
pub use header::mobile_header;
pub use input_area::input_area;
pub use message_list::message_list;
pub use sidebar::{RECENT_CHATS, sidebar};

use crate::chat::Mode;
use crate::ui::components::Icon;

/// HTMX attributes that post a form and swap the chat area.
pub(crate) fn swap_chat_area(path: &str) -> String {
    format!(r##"hx-post="{path}" hx-target="#{CHAT_AREA_ID}" hx-swap="outerHTML""##)
}

pub(crate) fn mode_icon(mode: Mode) -> Icon {
    match mode {
        Mode::Pro => Icon::Sparkles,
        Mode::Fast => Icon::Zap,
        Mode::Scholar => Icon::GraduationCap,
        Mode::Teacher => Icon::Users,
        Mode::Brother => Icon::MessageSquare,
        Mode::Tafsir => Icon::BookOpen,
    }
}

/// One form button per mode, posting the mode slug.
pub(crate) fn mode_buttons(modes: &[Mode], button_class: &str) -> String {
    let buttons: String = modes
        .iter()
        .map(|mode| {
            format!(
                r#"<button type="submit" name="mode" value="{}" class="{button_class}">{}{}</button>"#,
                mode.slug(),
                mode_icon(*mode).svg("opacity-70"),
                mode.label()
            )
        })
        .collect();
    format!(
        r#"<form method="post" action="/chat/mode" {} class="space-y-0.5">{buttons}</form>"#,
        swap_chat_area("/chat/mode")
    )
}
