//! Hero section.

use crate::ui::components::{BadgeVariant, Button, ButtonSize, ButtonVariant, Icon, badge};

#[must_use]
pub fn hero() -> String {
    let announcement = badge(
        BadgeVariant::Default,
        "w-fit",
        &format!("{}<span>Introducing ilmAI 1.0</span>", Icon::Sparkles.svg("h-3.5 w-3.5")),
    );
    let start = Button {
        size: ButtonSize::Lg,
        ..Button::default()
    }
    .render(&format!("Get Started {}", Icon::ArrowRight.svg("h-4 w-4")));
    let docs = Button {
        variant: ButtonVariant::Outline,
        size: ButtonSize::Lg,
        ..Button::default()
    }
    .render("View Documentation");
    let check = Icon::CheckCircle.svg("h-4 w-4 text-primary");

    format!(
        r#"<section class="relative pt-20 pb-32 overflow-hidden"><div class="container px-4 md:px-6"><div class="grid gap-12 lg:grid-cols-2 items-center"><div class="flex flex-col gap-6">{announcement}<h1 class="text-4xl md:text-6xl font-bold tracking-tighter text-primary leading-[1.1]">The Intelligent Future of <span class="text-blue-600 dark:text-blue-400">Knowledge</span></h1><p class="text-lg text-muted-foreground max-w-[600px]">ilmAI combines advanced artificial intelligence with intuitive design to help you manage, analyze, and create knowledge faster than ever before.</p><div class="flex flex-col sm:flex-row gap-4 mt-4"><a href="/">{start}</a>{docs}</div><div class="flex gap-4 mt-8 text-sm text-muted-foreground"><div class="flex items-center gap-1">{check} Free Tier Available</div><div class="flex items-center gap-1">{check} No Credit Card</div></div></div><div class="relative lg:h-[600px] w-full flex items-center justify-center"><div class="relative w-full aspect-square lg:aspect-auto lg:h-full rounded-2xl overflow-hidden shadow-2xl border border-border/50 bg-muted/20"><img src="/static/hero.png" alt="Abstract AI Visualization" class="object-cover w-full h-full"><div class="absolute -top-10 -right-10 w-40 h-40 bg-blue-500/20 rounded-full blur-3xl"></div><div class="absolute -bottom-10 -left-10 w-40 h-40 bg-indigo-500/20 rounded-full blur-3xl"></div></div></div></div></div></section>"#
    )
}
