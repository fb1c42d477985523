use crate::model::{Id, user::UserMarker};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub author_id: Id<UserMarker>,
    pub content: PostContent,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

/// A post that passed the presence checks and may be sent to the API.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct CreatePost {
    author: Id<UserMarker>,
    content: PostContent,
}

/// The `Display` text is shown to the user as-is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum InvalidPostError {
    #[error("Please enter a title for your post.")]
    EmptyTitle,
    #[error("Please enter a body for your post.")]
    EmptyBody,
}

impl CreatePost {
    pub fn new(author: Id<UserMarker>, content: PostContent) -> Result<Self, InvalidPostError> {
        if content.title.is_empty() {
            return Err(InvalidPostError::EmptyTitle);
        }
        if content.body.is_empty() {
            return Err(InvalidPostError::EmptyBody);
        }

        Ok(Self { author, content })
    }

    #[must_use]
    pub fn author(&self) -> Id<UserMarker> {
        self.author
    }

    #[must_use]
    pub fn content(&self) -> &PostContent {
        &self.content
    }
}
