//! Button component with variants and sizes.

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Subtle ghost button.
    Ghost,
    /// Destructive action button.
    Destructive,
    /// Outline button.
    Outline,
    /// Inverted button used for "New Chat".
    Solid,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "bg-transparent hover:bg-accent hover:text-foreground",
            Self::Destructive => "bg-destructive text-destructive-foreground hover:bg-destructive/90",
            Self::Outline => "border border-input bg-background hover:bg-accent",
            Self::Solid => "bg-foreground text-background hover:bg-foreground/90",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Icon-only button.
    Icon,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-9 px-3 text-sm",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-11 px-8 text-base",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Button properties.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    /// `type` attribute.
    pub button_type: &'a str,
    /// Additional CSS classes.
    pub class: &'a str,
    /// Extra raw attributes, e.g. `name="mode" value="fast"`.
    pub attrs: &'a str,
}

impl Default for Button<'_> {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::Primary,
            size: ButtonSize::Md,
            disabled: false,
            button_type: "button",
            class: "",
            attrs: "",
        }
    }
}

impl Button<'_> {
    /// Render with `children` as the button content.
    #[must_use]
    pub fn render(&self, children: &str) -> String {
        let base_classes = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";
        let disabled = if self.disabled { " disabled" } else { "" };
        format!(
            r#"<button type="{}" class="{} {} {} {}" {}{}>{}</button>"#,
            self.button_type,
            base_classes,
            self.variant.classes(),
            self.size.classes(),
            self.class,
            self.attrs,
            disabled,
            children
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variant_and_disabled() {
        let html = Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            disabled: true,
            button_type: "submit",
            ..Button::default()
        }
        .render("x");
        assert!(html.starts_with(r#"<button type="submit""#));
        assert!(html.contains(ButtonVariant::Ghost.classes()));
        assert!(html.contains(" disabled>x</button>"));
    }
}
