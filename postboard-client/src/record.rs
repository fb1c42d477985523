use postboard_common::model::post::{CreatePost, Post, PostContent};
use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePostRecord<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub user_id: u64,
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.id.into(),
            author_id: value.user_id.into(),
            content: PostContent {
                title: value.title,
                body: value.body,
            },
        }
    }
}

impl<'a> From<&'a CreatePost> for CreatePostRecord<'a> {
    fn from(value: &'a CreatePost) -> Self {
        Self {
            title: &value.content().title,
            body: &value.content().body,
            user_id: value.author().get(),
        }
    }
}
