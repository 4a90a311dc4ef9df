//! Separator component for visual division.

/// Separator orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorOrientation {
    /// Horizontal separator (default).
    #[default]
    Horizontal,
    /// Vertical separator.
    Vertical,
}

/// Visual separator line.
#[must_use]
pub fn separator(orientation: SeparatorOrientation, class: &str) -> String {
    let orientation_classes = match orientation {
        SeparatorOrientation::Horizontal => "h-[1px] w-full",
        SeparatorOrientation::Vertical => "h-full w-[1px]",
    };
    format!(r#"<div role="separator" class="shrink-0 bg-border {orientation_classes} {class}"></div>"#)
}
