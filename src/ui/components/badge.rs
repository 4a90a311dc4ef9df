//! Badge component for labels and tags.

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Tinted primary badge.
    #[default]
    Default,
    /// Muted badge used for mode labels.
    Secondary,
    /// Outline badge.
    Outline,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary/10 text-primary hover:bg-primary/20",
            Self::Secondary => "bg-accent text-muted-foreground border-border/50",
            Self::Outline => "border-border bg-transparent text-foreground",
        }
    }
}

/// Render a badge around already-escaped `children`.
#[must_use]
pub fn badge(variant: BadgeVariant, class: &str, children: &str) -> String {
    format!(
        r#"<span class="inline-flex items-center gap-2 rounded-full border px-3 py-1 text-sm font-medium {} {class}">{children}</span>"#,
        variant.classes()
    )
}
