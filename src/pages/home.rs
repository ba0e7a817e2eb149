//! Landing Page
//!
//! Entry point with links to the dashboard and chat routes.

use super::shell;

/// Render the landing page.
pub fn render() -> String {
    let body = r#"<main>
<h1>BiasGPT</h1>
<p>Progressive trading assistant.</p>
<nav>
<p><a href="/dashboard">View dashboard</a></p>
<p><a href="/chat">Open chat assistant</a></p>
</nav>
</main>"#;

    shell(body)
}
