use super::Theme;

/// Wrap `body` in the HTML document shell.
///
/// Scripts and styles are served locally from `/static` so the page works
/// offline; without them every form still works as a plain post.
#[must_use]
pub fn document(title: &str, theme: Theme, body: &str) -> String {
    let theme = theme.as_str();
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{theme}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="IlmAI - your assistant for Islamic studies">
    <title>{title} - IlmAI</title>
    <script src="/static/vendor/htmx.min.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="bg-background text-foreground transition-colors duration-300">
{body}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_theme_class_and_title() {
        let html = document("Chat", Theme::Light, "<p>hi</p>");
        assert!(html.contains(r#"<html lang="en" class="light">"#));
        assert!(html.contains("<title>Chat - IlmAI</title>"));
        assert!(html.contains("<p>hi</p>"));
    }
}
