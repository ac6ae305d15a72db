//! HTML rendering for the guestbook page.
//!
//! Templates are embedded at compile time and rendered from typed context
//! structs, keeping presentation separate from the data access layer.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::{error::Error, model::Message};

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

#[derive(Debug, Serialize)]
struct MessageView {
    name: String,
    message: String,
    posted_at: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        MessageView {
            name: message.name.to_owned(),
            message: message.message.to_owned(),
            posted_at: message
                .created_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
        }
    }
}

impl Views {
    pub fn new() -> Result<Views, Error> {
        let mut env = Environment::new();
        // The .html name keeps minijinja's HTML auto-escaping active.
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Views { env })
    }

    pub fn render_index(&self, messages: &[Message]) -> Result<String, Error> {
        let entries: Vec<MessageView> =
            messages.iter().map(MessageView::from).collect();

        let template = self.env.get_template("index.html")?;
        let body = template.render(context! { messages => entries })?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn message(id: i32, name: &str, text: &str) -> Message {
        Message {
            id,
            name: name.to_owned(),
            message: text.to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn renders_messages_in_given_order() {
        let views = Views::new().unwrap();
        let messages = vec![
            message(3, "Carol", "third"),
            message(2, "Bob", "second"),
            message(1, "Alice", "first"),
        ];

        let html = views.render_index(&messages).unwrap();

        let carol = html.find("Carol").unwrap();
        let bob = html.find("Bob").unwrap();
        let alice = html.find("Alice").unwrap();
        assert!(carol < bob && bob < alice);
        assert!(html.contains("2024-05-01 12:00 UTC"));
    }

    #[test]
    fn escapes_author_supplied_html() {
        let views = Views::new().unwrap();
        let messages =
            vec![message(1, "<script>alert(1)</script>", "b<i>old</i>")];

        let html = views.render_index(&messages).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("b<i>old</i>"));
    }

    #[test]
    fn renders_empty_state_and_form() {
        let views = Views::new().unwrap();

        let html = views.render_index(&[]).unwrap();

        assert!(html.contains("No messages yet"));
        assert!(html.contains("action=\"/message\""));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"message\""));
    }
}
