//! Toast notification.

use crate::chat::{Notification, NotificationVariant};
use crate::ui::escape;

/// Render a notification as a dismissable toast.
#[must_use]
pub fn toast(notification: &Notification) -> String {
    let variant = match notification.variant {
        NotificationVariant::Destructive => "border-destructive bg-destructive text-destructive-foreground",
        NotificationVariant::Default => "border bg-background text-foreground",
    };
    format!(
        r#"<div role="alert" class="toast fixed bottom-4 right-4 z-[100] w-full max-w-sm rounded-md border p-4 pr-8 shadow-lg {variant}"><div class="text-sm font-semibold">{}</div><div class="text-sm opacity-90">{}</div></div>"#,
        escape(&notification.title),
        escape(&notification.description)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_connection_failure() {
        let html = toast(&Notification::connection_failed());
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Failed to connect to IlmAI. Please try again later."));
        assert!(html.contains("bg-destructive"));
    }
}
