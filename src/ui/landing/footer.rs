//! Page footer.

use super::brand;

const COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Pricing", "Showcase"]),
    ("Company", ["About", "Careers", "Blog"]),
    ("Legal", ["Privacy", "Terms", "Cookie Policy"]),
];

const SOCIAL: [&str; 3] = ["Twitter", "GitHub", "Discord"];

fn link(label: &str) -> String {
    format!(r##"<a href="#" class="hover:text-primary">{label}</a>"##)
}

#[must_use]
pub fn footer() -> String {
    let columns: String = COLUMNS
        .iter()
        .map(|(heading, links)| {
            let items: String = links.iter().map(|l| format!("<li>{}</li>", link(l))).collect();
            format!(
                r#"<div><h3 class="font-semibold mb-4">{heading}</h3><ul class="space-y-2 text-sm text-muted-foreground">{items}</ul></div>"#
            )
        })
        .collect();
    let social: String = SOCIAL.iter().map(|s| link(s)).collect();

    format!(
        r#"<footer class="border-t bg-background py-12"><div class="container px-4 md:px-6"><div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-12"><div class="col-span-2 md:col-span-1">{brand}<p class="text-sm text-muted-foreground">Empowering intelligence through data.</p></div>{columns}</div><div class="pt-8 border-t flex flex-col md:flex-row justify-between items-center gap-4 text-sm text-muted-foreground"><p>&copy; 2025 ilmAI Inc. All rights reserved.</p><div class="flex gap-4">{social}</div></div></div></footer>"#,
        brand = brand("mb-4"),
    )
}
