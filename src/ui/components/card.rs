//! Card component with header and content sections.

/// Card container.
#[must_use]
pub fn card(class: &str, children: &str) -> String {
    format!(
        r#"<div class="rounded-xl border bg-card text-card-foreground shadow-sm {class}">{children}</div>"#
    )
}

/// Card header section.
#[must_use]
pub fn card_header(class: &str, children: &str) -> String {
    format!(r#"<div class="flex flex-col space-y-1.5 p-6 {class}">{children}</div>"#)
}

#[must_use]
pub fn card_title(class: &str, text: &str) -> String {
    format!(r#"<h3 class="text-2xl font-semibold leading-none tracking-tight {class}">{text}</h3>"#)
}

#[must_use]
pub fn card_description(class: &str, text: &str) -> String {
    format!(r#"<p class="text-sm text-muted-foreground {class}">{text}</p>"#)
}

/// Card content section.
#[must_use]
pub fn card_content(class: &str, children: &str) -> String {
    format!(r#"<div class="p-6 pt-0 {class}">{children}</div>"#)
}
