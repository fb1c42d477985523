use crate::model::post::Post;
use std::fmt::{Display, Formatter};

/// Rendered markup for a single post in the posts container.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Fragment(String);

impl Fragment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the characters that are significant in both text and attribute context.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[must_use]
pub fn post_fragment(post: &Post) -> Fragment {
    let title = escape_html(&post.content.title);
    let body = escape_html(&post.content.body);

    Fragment(format!(
        "<div class='post'>\
         <div class='post-content'>\
         <div class='post-title'>{title}</div>\
         <div class='post-body'>{body}</div>\
         </div>\
         </div>"
    ))
}
