use crate::{
    page::document::ElementHandle,
    server::{Page, html::Html},
};
use axum::http::StatusCode;
use postboard_common::template::escape_html;

/// Renders the current state of the document as a full HTML page.
///
/// Pending alerts are drained, so each one is shown once.
pub fn page_html(page: &Page) -> Html {
    let document = page.dom();
    let elements = page.elements();
    let snapshot = |element: &ElementHandle| document.snapshot(element.id()).unwrap_or_default();

    let title = snapshot(&elements.title_input);
    let body = snapshot(&elements.body_input);
    let posts = snapshot(&elements.posts_container).children.concat();
    let disabled = if snapshot(&elements.submit_button).disabled {
        " disabled"
    } else {
        ""
    };

    let alerts: String = document
        .take_alerts()
        .iter()
        .map(|alert| format!("<p class='alert' role='alert'>{}</p>", escape_html(alert)))
        .collect();

    let title_id = escape_html(elements.title_input.id());
    let body_id = escape_html(elements.body_input.id());
    let posts_id = escape_html(elements.posts_container.id());
    let button_id = escape_html(elements.submit_button.id());
    let title_value = escape_html(&title.value);
    let body_value = escape_html(&body.value);

    Html(format!(
        "<!DOCTYPE html>\
         <html lang='en'>\
         <head><meta charset='utf-8'><title>Posts</title></head>\
         <body>\
         {alerts}\
         <form method='post' action='/posts/create'>\
         <input id='{title_id}' name='title' placeholder='Title' value='{title_value}'>\
         <input id='{body_id}' name='body' placeholder='Body' value='{body_value}'>\
         <button id='{button_id}' type='submit'{disabled}>Add post</button>\
         </form>\
         <div id='{posts_id}'>{posts}</div>\
         </body>\
         </html>"
    ))
}

pub fn error_html(status: StatusCode) -> Html {
    let status = escape_html(&status.to_string());

    Html(format!(
        "<!DOCTYPE html>\
         <html lang='en'>\
         <head><meta charset='utf-8'><title>{status}</title></head>\
         <body><h1>{status}</h1><p><a href='/'>Back to posts</a></p></body>\
         </html>"
    ))
}
