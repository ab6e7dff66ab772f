use crate::config::AssetConfig;
use crate::databases::messages::Message;

pub const MOUNT_NODE_ID: &str = "elm-root";

pub const FRONTEND_PACK: &str = "hello_elm.js";

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn message_item(message: &Message) -> String {
    format!(
        r#"<li class="message" data-id="{}"><strong class="message-name">{}</strong> <span class="message-content">{}</span> <time datetime="{}">{}</time></li>"#,
        message.id,
        escape_html(&message.name),
        escape_html(&message.content),
        message.created_at.to_rfc3339(),
        message.created_at.format("%Y-%m-%d %H:%M"),
    )
}

/// Message list page. The server-rendered list is what clients without
/// JavaScript see; the front-end bundle mounts onto `#elm-root`.
pub fn index_page(messages: &[Message], assets: &AssetConfig) -> String {
    let items = if messages.is_empty() {
        r#"<li class="empty">No messages yet.</li>"#.to_string()
    } else {
        messages.iter().map(message_item).collect::<Vec<_>>().join("\n      ")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Messages</title>
    <script src="{packs}/{pack}" defer></script>
  </head>
  <body>
    <h1>Messages</h1>
    <ul id="messages">
      {items}
    </ul>
    <div id="{mount}"></div>
  </body>
</html>
"#,
        packs = assets.packs_url.trim_end_matches('/'),
        pack = FRONTEND_PACK,
        items = items,
        mount = MOUNT_NODE_ID,
    )
}
