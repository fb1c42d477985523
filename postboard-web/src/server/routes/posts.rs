use crate::server::{Page, ServerError, ServerRouter, form::Form, html::Html, shell};
use axum::{extract::State, response::Redirect};
use axum_extra::routing::{RouterExt, TypedPath};
use postboard_common::model::post::PostContent;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(show_page)
        .typed_post(create_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct PagePath();

async fn show_page(PagePath(): PagePath, State(page): State<Arc<Page>>) -> Html {
    shell::page_html(&page)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/create", rejection(ServerError))]
struct CreatePostPath();

/// Missing fields count as empty inputs.
#[derive(Clone, Eq, PartialEq, Debug, Default, Deserialize)]
struct CreatePostForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(page): State<Arc<Page>>,
    Form(form): Form<CreatePostForm>,
) -> Redirect {
    let outcome = page
        .submit_content(PostContent {
            title: form.title,
            body: form.body,
        })
        .await;
    debug!(?outcome, "Handled post submission");

    Redirect::to("/")
}
