//! Mobile header with the slide-out mode sheet.

use super::mode_buttons;
use crate::chat::Mode;
use crate::ui::ViewContext;
use crate::ui::components::{Icon, theme_toggle};

/// Header shown on narrow screens instead of the sidebar.
#[must_use]
pub fn mobile_header(ctx: ViewContext) -> String {
    format!(
        r#"<div class="md:hidden flex items-center p-4 border-b border-border bg-background/80 backdrop-blur-md sticky top-0 z-50"><details class="relative"><summary class="list-none cursor-pointer h-10 w-10 inline-flex items-center justify-center rounded-md hover:bg-accent">{menu}<span class="sr-only">Open menu</span></summary><div class="fixed inset-y-0 left-0 z-50 w-72 p-0 border-r border-border bg-sidebar flex flex-col"><div class="p-4 flex items-center gap-2"><div class="h-8 w-8 rounded-lg bg-primary/10 flex items-center justify-center">{bot}</div><span class="font-semibold text-lg tracking-tight">IlmAI</span></div><div class="px-3 py-2"><h3 class="text-xs font-semibold text-muted-foreground mb-2 px-2 uppercase tracking-wider">Assistant Modes</h3>{modes}</div></div></details><span class="font-semibold ml-2">New Chat</span><div class="ml-auto">{toggle}</div></div>"#,
        menu = Icon::Menu.svg("h-5 w-5"),
        bot = Icon::Bot.svg("h-5 w-5 text-primary"),
        modes = mode_buttons(
            &Mode::PERSONAS,
            "w-full flex items-center gap-2 h-9 px-3 rounded-md text-sm text-muted-foreground hover:text-foreground hover:bg-accent"
        ),
        toggle = theme_toggle(ctx.theme, "/", "rounded-full"),
    )
}
