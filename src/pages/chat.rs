//! Chat Page
//!
//! Renders the transcript in order and the submit form. Citations are
//! shown as a sub-list only when an entry has any; confidence is shown
//! only when present. The assistant/user distinction is cosmetic.

use super::{html_escape, shell};
use crate::model::{ChatMessage, Role};

/// Render the chat page over the current transcript.
pub fn render(transcript: &[ChatMessage]) -> String {
    let mut entries = String::new();
    for message in transcript {
        entries.push_str(&render_message(message));
    }

    let body = format!(
        r#"<main>
<h1>Chat Assistant</h1>
<p>Mock transcript. Substitute the chat backend once it is ready.</p>
<section id="transcript">
{entries}
</section>
<form method="post" action="/chat">
<input type="text" name="message" placeholder="Ask about whale activity">
<button type="submit">Send</button>
</form>
<footer><a href="/">Return home</a></footer>
</main>"#,
    );

    shell(&body)
}

fn render_message(message: &ChatMessage) -> String {
    let (class, author) = match message.role {
        Role::Assistant => ("assistant", "Assistant"),
        Role::User => ("user", "You"),
    };

    let mut html = format!(
        r#"<article class="message {class}">
<header>{author}</header>
<p>{content}</p>
"#,
        content = html_escape(&message.content),
    );

    if !message.citations.is_empty() {
        html.push_str("<footer>\n<h4>Citations</h4>\n<ul>\n");
        for citation in &message.citations {
            html.push_str(&format!("<li>{}</li>\n", html_escape(citation)));
        }
        html.push_str("</ul>\n</footer>\n");
    }

    if let Some(confidence) = message.confidence {
        html.push_str(&format!(
            "<p class=\"confidence\">Confidence: {confidence}</p>\n"
        ));
    }

    html.push_str("</article>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MarketData, SampleData};

    #[tokio::test]
    async fn renders_seeded_history_in_order() {
        let history = SampleData::new().chat_history().await;
        let html = render(&history);

        let assistant = html.find("Whale deposit detected").unwrap();
        let user = html.find("Should we hedge our ETH exposure?").unwrap();
        assert!(assistant < user);
        assert_eq!(html.matches("<article class=\"message").count(), 2);
    }

    #[tokio::test]
    async fn citations_render_only_when_present() {
        let history = SampleData::new().chat_history().await;
        let html = render(&history);

        assert_eq!(html.matches("<h4>Citations</h4>").count(), 1);
        assert!(html.contains("<li>evt_123</li>"));
        assert!(html.contains("<li>evt_456</li>"));
    }

    #[tokio::test]
    async fn confidence_renders_only_when_present() {
        let history = SampleData::new().chat_history().await;
        let html = render(&history);

        assert_eq!(html.matches("Confidence:").count(), 1);
        assert!(html.contains("Confidence: 0.78"));
    }

    #[test]
    fn user_entry_renders_no_citation_list_or_confidence() {
        let html = render(&[ChatMessage::user("Hedge now?")]);
        assert!(html.contains("Hedge now?"));
        assert!(!html.contains("Citations"));
        assert!(!html.contains("Confidence:"));
    }

    #[test]
    fn empty_transcript_renders_page_without_entries() {
        let html = render(&[]);
        assert!(html.contains("Chat Assistant"));
        assert!(!html.contains("<article"));
        assert!(html.contains("<form method=\"post\" action=\"/chat\">"));
    }

    #[test]
    fn message_content_is_escaped() {
        let html = render(&[ChatMessage::user("<img src=x>")]);
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }
}
