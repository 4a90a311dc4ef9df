//! Dashboard shell with placeholder statistics.

use crate::ui::components::{
    Button, ButtonSize, ButtonVariant, Icon, SeparatorOrientation, avatar, card, card_content, card_header,
    card_title, input, separator,
};

const NAV_ITEMS: [(Icon, &str); 4] = [
    (Icon::LayoutDashboard, "Overview"),
    (Icon::Users, "Customers"),
    (Icon::BarChart, "Analytics"),
    (Icon::Settings, "Settings"),
];

/// Title, value, change line.
const STATS: [(&str, &str, &str); 4] = [
    ("Total Revenue", "$45,231.89", "+20.1% from last month"),
    ("Subscriptions", "+2350", "+180.1% from last month"),
    ("Active Now", "+573", "+201 since last hour"),
    ("Sales", "+12,234", "+19% from last month"),
];

fn sidebar() -> String {
    let items: String = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (icon, label))| {
            Button {
                variant: if i == 0 {
                    ButtonVariant::Secondary
                } else {
                    ButtonVariant::Ghost
                },
                class: "w-full justify-start gap-3",
                ..Button::default()
            }
            .render(&format!("{}{label}", icon.svg("")))
        })
        .collect();
    let back = Button {
        variant: ButtonVariant::Outline,
        class: "w-full",
        ..Button::default()
    }
    .render("Back to Home");

    format!(
        r#"<aside class="hidden md:flex w-64 flex-col border-r bg-background"><div class="p-6 h-16 flex items-center border-b"><div class="flex items-center gap-2 font-bold text-xl"><div class="h-8 w-8 rounded-lg bg-primary flex items-center justify-center text-primary-foreground">T</div><span>Template</span></div></div><div class="flex-1 py-6 px-3 space-y-1">{items}</div><div class="p-4 border-t"><a href="/home">{back}</a></div></aside>"#
    )
}

fn top_header() -> String {
    let bell = Button {
        variant: ButtonVariant::Ghost,
        size: ButtonSize::Icon,
        ..Button::default()
    }
    .render(&Icon::Bell.svg("h-5 w-5"));
    format!(
        r#"<header class="h-16 border-b bg-background flex items-center justify-between px-6"><div class="w-96"><div class="relative">{search}{field}</div></div><div class="flex items-center gap-4">{bell}{rule}{avatar}</div></header>"#,
        search = Icon::Search.svg("absolute left-2.5 top-2.5 h-4 w-4 text-muted-foreground"),
        field = input("q", "Search...", "pl-9 bg-muted/40"),
        rule = separator(SeparatorOrientation::Vertical, "h-8"),
        avatar = avatar("CN", ""),
    )
}

fn stat_card((title, value, change): &(&str, &str, &str)) -> String {
    card(
        "",
        &format!(
            "{}{}",
            card_header(
                "flex flex-row items-center justify-between space-y-0 pb-2",
                &card_title("text-sm font-medium", title)
            ),
            card_content(
                "",
                &format!(
                    r#"<div class="text-2xl font-bold">{value}</div><p class="text-xs text-muted-foreground">{change}</p>"#
                )
            )
        ),
    )
}

fn recent_sales() -> String {
    let sale = format!(
        r#"<div class="flex items-center">{}<div class="ml-4 space-y-1"><p class="text-sm font-medium leading-none">Olivia Martin</p><p class="text-sm text-muted-foreground">olivia.martin@email.com</p></div><div class="ml-auto font-medium text-sm">+$1,999.00</div></div>"#,
        avatar("OM", "h-9 w-9")
    );
    let rows = sale.repeat(5);
    card(
        "col-span-3",
        &format!(
            "{}{}",
            card_header("", &card_title("", "Recent Sales")),
            card_content("", &format!(r#"<div class="space-y-8">{rows}</div>"#))
        ),
    )
}

/// Dashboard body.
#[must_use]
pub fn dashboard() -> String {
    let stats: String = STATS.iter().map(stat_card).collect();
    let overview = card(
        "col-span-4",
        &format!(
            "{}{}",
            card_header("", &card_title("", "Overview")),
            card_content(
                "pl-2",
                r#"<div class="h-[300px] flex items-center justify-center bg-muted/20 rounded-md border border-dashed text-muted-foreground">Chart Placeholder</div>"#
            )
        ),
    );

    format!(
        r#"<div class="flex h-screen bg-muted/20">{sidebar}<div class="flex-1 flex flex-col overflow-hidden">{header}<main class="flex-1 overflow-y-auto p-6"><div class="mb-8"><h1 class="text-3xl font-bold tracking-tight">Dashboard</h1><p class="text-muted-foreground">Welcome back to your overview.</p></div><div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4 mb-8">{stats}</div><div class="grid gap-4 md:grid-cols-2 lg:grid-cols-7">{overview}{sales}</div></main></div></div>"#,
        sidebar = sidebar(),
        header = top_header(),
        sales = recent_sales(),
    )
}
