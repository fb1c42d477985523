use crate::page::dom::{Dom, InsertPosition};
use postboard_common::{
    model::post::Post,
    template::{Fragment, post_fragment},
};

/// One mutation of the posts container.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Patch {
    Clear,
    Insert(InsertPosition, Fragment),
}

#[must_use]
pub fn show_all_patches(posts: &[Post]) -> Vec<Patch> {
    std::iter::once(Patch::Clear)
        .chain(
            posts
                .iter()
                .map(|post| Patch::Insert(InsertPosition::BeforeEnd, post_fragment(post))),
        )
        .collect()
}

#[must_use]
pub fn prepend_patch(post: &Post) -> Patch {
    Patch::Insert(InsertPosition::AfterBegin, post_fragment(post))
}

/// Applies patches to the posts container of a document.
pub struct RenderController<'a, D: Dom> {
    dom: &'a D,
    container: &'a D::Element,
}

impl<'a, D: Dom> RenderController<'a, D> {
    pub fn new(dom: &'a D, container: &'a D::Element) -> Self {
        Self { dom, container }
    }

    pub fn show_all(&self, posts: &[Post]) {
        self.apply(show_all_patches(posts));
    }

    pub fn prepend_one(&self, post: &Post) {
        self.apply([prepend_patch(post)]);
    }

    pub fn apply(&self, patches: impl IntoIterator<Item = Patch>) {
        for patch in patches {
            match patch {
                Patch::Clear => self.dom.set_inner_html(self.container, ""),
                Patch::Insert(position, fragment) => {
                    self.dom
                        .insert_adjacent_html(self.container, position, fragment.as_str());
                }
            }
        }
    }
}
