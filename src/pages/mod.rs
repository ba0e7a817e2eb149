//! Page Renderers
//!
//! Server-rendered HTML for the landing, dashboard and chat pages. Every
//! renderer is a total function from its input collections to a markup
//! string: empty input yields an empty section, never an error. All
//! interpolated record fields are HTML-escaped.

pub mod chat;
pub mod dashboard;
pub mod home;

/// Document title shared by every page.
pub const APP_TITLE: &str = "BiasGPT";

/// Document description shared by every page.
pub const APP_DESCRIPTION: &str = "Whale-driven AI trader dashboard";

/// Path of the installable-app manifest referenced from every page head.
pub const MANIFEST_PATH: &str = "/manifest.json";

/// Wrap a page body with the shared document shell: title, description
/// and manifest reference, with child content passed through unmodified.
/// The title is global metadata; pages do not override it.
pub fn shell(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<link rel="manifest" href="{manifest}">
<style>
body {{ margin: 0; font-family: system-ui, sans-serif; background: #030712; color: #e5e7eb; }}
main {{ padding: 2rem; max-width: 720px; margin: 0 auto; display: grid; gap: 1.5rem; }}
article {{ border: 1px solid #1f2937; border-radius: 0.75rem; padding: 1rem; }}
a {{ color: #60a5fa; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = APP_TITLE,
        description = APP_DESCRIPTION,
        manifest = MANIFEST_PATH,
        body = body,
    )
}

/// Escape a record field for interpolation into markup.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
