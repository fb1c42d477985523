use crate::page::{PageContext, dom::Dom};
use postboard_client::client::PostsApi;
use postboard_common::model::post::{CreatePost, InvalidPostError, Post, PostContent};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// A required field was empty. The user was alerted and the inputs kept.
    Rejected(InvalidPostError),
    /// Another submission was still in flight.
    Busy,
    Created(Post),
    Failed,
}

/// Drives the idle -> submitting -> idle cycle of the new-post form.
#[derive(Debug, Default)]
pub struct FormController {
    in_flight: AtomicBool,
}

impl FormController {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits whatever the inputs currently hold.
    pub async fn submit<A: PostsApi, D: Dom>(&self, page: &PageContext<A, D>) -> SubmitOutcome {
        self.run(page, None).await
    }

    /// Writes `content` into the inputs and submits it in one step.
    ///
    /// The inputs are only written once the in-flight guard is held, so a
    /// `Busy` outcome leaves them untouched.
    pub async fn submit_content<A: PostsApi, D: Dom>(
        &self,
        page: &PageContext<A, D>,
        content: PostContent,
    ) -> SubmitOutcome {
        self.run(page, Some(content)).await
    }

    async fn run<A: PostsApi, D: Dom>(
        &self,
        page: &PageContext<A, D>,
        entered: Option<PostContent>,
    ) -> SubmitOutcome {
        let dom = page.dom();
        let elements = page.elements();

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, dom, &elements.submit_button)
        else {
            warn!("A submission is already in flight");
            return SubmitOutcome::Busy;
        };

        if let Some(entered) = entered {
            dom.set_value(&elements.title_input, &entered.title);
            dom.set_value(&elements.body_input, &entered.body);
        }

        let content = PostContent {
            title: dom.value(&elements.title_input),
            body: dom.value(&elements.body_input),
        };
        let post = match CreatePost::new(page.author(), content) {
            Ok(post) => post,
            Err(err) => {
                debug!(reason = %err, "Rejected submission");
                dom.alert(&err.to_string());
                return SubmitOutcome::Rejected(err);
            }
        };

        let outcome = match page.api().create_post(&post).await {
            Ok(created) => {
                info!(id = %created.id, "Created post");
                page.renderer().prepend_one(&created);
                SubmitOutcome::Created(created)
            }
            Err(err) => {
                error!(error = %err, "Failed to create post");
                SubmitOutcome::Failed
            }
        };

        dom.set_value(&elements.title_input, "");
        dom.set_value(&elements.body_input, "");

        outcome
    }
}

/// Holds the in-flight flag and keeps the submit button disabled until dropped.
struct InFlightGuard<'a, D: Dom> {
    flag: &'a AtomicBool,
    dom: &'a D,
    button: &'a D::Element,
}

impl<'a, D: Dom> InFlightGuard<'a, D> {
    fn acquire(flag: &'a AtomicBool, dom: &'a D, button: &'a D::Element) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        dom.set_disabled(button, true);

        Some(Self { flag, dom, button })
    }
}

impl<D: Dom> Drop for InFlightGuard<'_, D> {
    fn drop(&mut self) {
        self.dom.set_disabled(self.button, false);
        self.flag.store(false, Ordering::Release);
    }
}
