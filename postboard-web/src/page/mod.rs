pub mod document;
pub mod dom;
pub mod form;
pub mod render;

use dom::{BoundElements, Dom, ElementIds, MissingElementError};
use form::{FormController, SubmitOutcome};
use postboard_client::client::PostsApi;
use postboard_common::model::{
    Id,
    post::PostContent,
    user::{ANONYMOUS_USER, UserMarker},
};
use render::RenderController;
use tracing::{error, info};

/// Everything the page controllers share, built once at startup.
pub struct PageContext<A, D: Dom> {
    api: A,
    dom: D,
    elements: BoundElements<D::Element>,
    author: Id<UserMarker>,
    form: FormController,
}

impl<A: PostsApi, D: Dom> PageContext<A, D> {
    pub fn new(api: A, dom: D, ids: &ElementIds) -> Result<Self, MissingElementError> {
        let elements = BoundElements::bind(&dom, ids)?;

        Ok(Self {
            api,
            dom,
            elements,
            author: ANONYMOUS_USER,
            form: FormController::default(),
        })
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[must_use]
    pub fn elements(&self) -> &BoundElements<D::Element> {
        &self.elements
    }

    /// Author id attached to every submitted post.
    #[must_use]
    pub fn author(&self) -> Id<UserMarker> {
        self.author
    }

    #[must_use]
    pub fn form(&self) -> &FormController {
        &self.form
    }

    #[must_use]
    pub fn renderer(&self) -> RenderController<'_, D> {
        RenderController::new(&self.dom, &self.elements.posts_container)
    }

    /// Fetches the post list and replaces the container content with it.
    ///
    /// Returns the number of rendered posts, or `None` if fetching failed, in
    /// which case the container is left untouched.
    pub async fn load(&self) -> Option<usize> {
        match self.api.list_posts().await {
            Ok(posts) => {
                self.renderer().show_all(&posts);
                info!(count = posts.len(), "Rendered posts");
                Some(posts.len())
            }
            Err(err) => {
                error!(error = %err, "Failed fetching posts");
                None
            }
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.form.submit(self).await
    }

    pub async fn submit_content(&self, content: PostContent) -> SubmitOutcome {
        self.form.submit_content(self, content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::document::Document;
    use postboard_client::client::{ApiError, Result};
    use postboard_common::{
        model::post::{CreatePost, InvalidPostError, Post},
        template::post_fragment,
    };
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct MockApi {
        posts: Option<Vec<Post>>,
        create_fails: bool,
        gate: Option<Arc<Notify>>,
        created: Mutex<Vec<CreatePost>>,
    }

    impl MockApi {
        fn created(&self) -> Vec<CreatePost> {
            self.created.lock().unwrap().clone()
        }
    }

    impl PostsApi for MockApi {
        async fn list_posts(&self) -> Result<Vec<Post>> {
            self.posts
                .clone()
                .ok_or(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }

        async fn create_post(&self, post: &CreatePost) -> Result<Post> {
            self.created.lock().unwrap().push(post.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            if self.create_fails {
                Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE))
            } else {
                Ok(Post {
                    id: 101.into(),
                    author_id: post.author(),
                    content: post.content().clone(),
                })
            }
        }
    }

    fn post(id: u64, title: &str, body: &str) -> Post {
        Post {
            id: id.into(),
            author_id: 1.into(),
            content: PostContent {
                title: title.to_owned(),
                body: body.to_owned(),
            },
        }
    }

    fn page(api: MockApi) -> PageContext<MockApi, Document> {
        let ids = ElementIds::default();
        PageContext::new(api, Document::with_elements(ids.all()), &ids).unwrap()
    }

    fn fill_form(page: &PageContext<MockApi, Document>, title: &str, body: &str) {
        page.dom().set_value(&page.elements().title_input, title);
        page.dom().set_value(&page.elements().body_input, body);
    }

    fn rendered(page: &PageContext<MockApi, Document>) -> Vec<String> {
        page.dom().snapshot("posts").unwrap().children
    }

    fn inputs(page: &PageContext<MockApi, Document>) -> (String, String) {
        (
            page.dom().snapshot("new-post-title").unwrap().value,
            page.dom().snapshot("new-post-body").unwrap().value,
        )
    }

    #[tokio::test]
    async fn load_renders_every_post_in_order() {
        let posts = vec![post(1, "A", "B"), post(2, "C", "D"), post(3, "E", "F")];
        let page = page(MockApi {
            posts: Some(posts.clone()),
            ..MockApi::default()
        });

        assert_eq!(page.load().await, Some(3));

        let expected: Vec<_> = posts.iter().map(|p| post_fragment(p).into_inner()).collect();
        assert_eq!(rendered(&page), expected);
    }

    #[tokio::test]
    async fn failed_load_leaves_container_untouched() {
        let page = page(MockApi::default());
        page.renderer().prepend_one(&post(1, "A", "B"));

        assert_eq!(page.load().await, None);
        assert_eq!(rendered(&page).len(), 1);
    }

    #[tokio::test]
    async fn empty_title_is_rejected_without_request() {
        let page = page(MockApi::default());
        fill_form(&page, "", "body");

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected(InvalidPostError::EmptyTitle));
        assert!(page.api().created().is_empty());
        assert_eq!(inputs(&page), (String::new(), "body".to_owned()));
        assert_eq!(
            page.dom().take_alerts(),
            [InvalidPostError::EmptyTitle.to_string()]
        );
    }

    #[tokio::test]
    async fn empty_body_is_rejected_without_request() {
        let page = page(MockApi::default());
        fill_form(&page, "title", "");

        let outcome = page.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected(InvalidPostError::EmptyBody));
        assert!(page.api().created().is_empty());
        assert_eq!(inputs(&page), ("title".to_owned(), String::new()));
        assert_eq!(page.dom().take_alerts().len(), 1);
    }

    #[tokio::test]
    async fn submit_creates_exactly_one_post_as_anonymous_user() {
        let page = page(MockApi::default());
        fill_form(&page, "X", "Y");

        page.submit().await;

        let created = page.api().created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].author().get(), 0);
        assert_eq!(created[0].content().title, "X");
        assert_eq!(created[0].content().body, "Y");
    }

    #[tokio::test]
    async fn created_post_is_prepended_and_inputs_cleared() {
        let page = page(MockApi {
            posts: Some(vec![post(1, "A", "B")]),
            ..MockApi::default()
        });
        page.load().await;
        fill_form(&page, "X", "Y");

        let created = match page.submit().await {
            SubmitOutcome::Created(created) => created,
            outcome => panic!("expected a created post, got {outcome:?}"),
        };
        assert_eq!(created.id.get(), 101);
        assert_eq!(
            rendered(&page),
            [
                post_fragment(&created).into_inner(),
                post_fragment(&post(1, "A", "B")).into_inner(),
            ]
        );
        assert_eq!(inputs(&page), (String::new(), String::new()));
        assert!(page.dom().take_alerts().is_empty());
    }

    #[tokio::test]
    async fn failed_create_leaves_container_and_clears_inputs() {
        let page = page(MockApi {
            posts: Some(vec![post(1, "A", "B")]),
            create_fails: true,
            ..MockApi::default()
        });
        page.load().await;
        let before = rendered(&page);
        fill_form(&page, "X", "Y");

        assert_eq!(page.submit().await, SubmitOutcome::Failed);
        assert_eq!(rendered(&page), before);
        assert_eq!(inputs(&page), (String::new(), String::new()));
    }

    #[tokio::test]
    async fn overlapping_submit_is_refused_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let page = Arc::new(page(MockApi {
            gate: Some(Arc::clone(&gate)),
            ..MockApi::default()
        }));
        fill_form(&page, "X", "Y");

        let first = tokio::spawn({
            let page = Arc::clone(&page);
            async move { page.submit().await }
        });
        while !page.form().is_submitting() {
            tokio::task::yield_now().await;
        }

        assert!(page.dom().snapshot("add-post").unwrap().disabled);
        assert_eq!(page.submit().await, SubmitOutcome::Busy);

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), SubmitOutcome::Created(_)));
        assert_eq!(page.api().created().len(), 1);
        assert!(!page.dom().snapshot("add-post").unwrap().disabled);
        assert!(!page.form().is_submitting());
    }

    #[tokio::test]
    async fn busy_submit_leaves_inputs_of_first_submission() {
        let gate = Arc::new(Notify::new());
        let page = Arc::new(page(MockApi {
            gate: Some(Arc::clone(&gate)),
            ..MockApi::default()
        }));

        let first = tokio::spawn({
            let page = Arc::clone(&page);
            async move {
                page.submit_content(PostContent {
                    title: "X".to_owned(),
                    body: "Y".to_owned(),
                })
                .await
            }
        });
        while !page.form().is_submitting() {
            tokio::task::yield_now().await;
        }

        let second = page
            .submit_content(PostContent {
                title: "Z".to_owned(),
                body: "W".to_owned(),
            })
            .await;

        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(inputs(&page), ("X".to_owned(), "Y".to_owned()));

        gate.notify_one();
        assert!(matches!(first.await.unwrap(), SubmitOutcome::Created(_)));
        let created = page.api().created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].content().title, "X");
        assert_eq!(created[0].content().body, "Y");
        assert_eq!(inputs(&page), (String::new(), String::new()));
    }

    #[tokio::test]
    async fn submit_content_uses_page_author() {
        let page = page(MockApi::default());

        page.submit_content(PostContent {
            title: "X".to_owned(),
            body: "Y".to_owned(),
        })
        .await;

        assert_eq!(page.api().created()[0].author(), page.author());
        assert_eq!(page.author(), ANONYMOUS_USER);
    }
}
