//! Avatar with initials fallback.

/// Avatar showing `fallback` initials.
#[must_use]
pub fn avatar(fallback: &str, class: &str) -> String {
    format!(
        r#"<span class="relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full {class}"><span class="flex h-full w-full items-center justify-center rounded-full bg-muted text-sm">{fallback}</span></span>"#
    )
}
