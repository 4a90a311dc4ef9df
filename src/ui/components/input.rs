//! Text input field.

/// Single-line text input.
#[must_use]
pub fn input(name: &str, placeholder: &str, class: &str) -> String {
    format!(
        r#"<input type="text" name="{name}" placeholder="{placeholder}" class="flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring {class}">"#
    )
}
