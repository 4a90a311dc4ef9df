//! Features grid.

use crate::ui::components::{Icon, card, card_content, card_description, card_header, card_title};

/// One feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Lightning Fast",
        description: "Optimized for speed with the latest tech stack. Zero bloat, maximum performance.",
        icon: Icon::Zap,
    },
    Feature {
        title: "Secure by Default",
        description: "Enterprise-grade security features built-in to protect your data and users.",
        icon: Icon::Shield,
    },
    Feature {
        title: "Mobile First",
        description: "Responsive design that looks perfect on any device, from phones to desktops.",
        icon: Icon::Smartphone,
    },
    Feature {
        title: "Global Scale",
        description: "Deploy anywhere with our cloud-agnostic infrastructure ready for scale.",
        icon: Icon::Globe,
    },
    Feature {
        title: "Modular Architecture",
        description: "Composable components that fit together perfectly like building blocks.",
        icon: Icon::Layers,
    },
    Feature {
        title: "Intuitive UX",
        description: "Crafted with attention to detail for the best possible user experience.",
        icon: Icon::MousePointer,
    },
];

fn feature_card(feature: &Feature) -> String {
    let header = format!(
        r#"<div class="h-12 w-12 rounded-lg bg-primary/10 flex items-center justify-center mb-4 text-primary">{}</div>{}"#,
        feature.icon.svg("h-6 w-6"),
        card_title("", feature.title)
    );
    card(
        "border-none shadow-sm hover:shadow-md transition-shadow",
        &format!(
            "{}{}",
            card_header("", &header),
            card_content("", &card_description("text-base", feature.description))
        ),
    )
}

#[must_use]
pub fn features() -> String {
    let cards: String = FEATURES.iter().map(feature_card).collect();
    format!(
        r#"<section id="features" class="py-24 bg-muted/30"><div class="container px-4 md:px-6"><div class="text-center max-w-3xl mx-auto mb-16"><h2 class="text-3xl md:text-4xl font-bold mb-4">Features that matter</h2><p class="text-muted-foreground text-lg">Everything you need to build professional applications without the headache.</p></div><div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div></div></section>"#
    )
}
