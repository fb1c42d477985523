use std::fmt::Debug;
use thiserror::Error;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum InsertPosition {
    /// Before the first child of the element.
    AfterBegin,
    /// After the last child of the element.
    BeforeEnd,
}

/// The subset of a document the page controllers touch.
///
/// Methods take `&self` so a document can be shared between the host and the
/// controllers; implementations synchronize internally.
pub trait Dom: Send + Sync {
    type Element: Clone + Debug + Send + Sync;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn value(&self, element: &Self::Element) -> String;

    fn set_value(&self, element: &Self::Element, value: &str);

    fn set_inner_html(&self, element: &Self::Element, html: &str);

    fn insert_adjacent_html(&self, element: &Self::Element, position: InsertPosition, html: &str);

    fn set_disabled(&self, element: &Self::Element, disabled: bool);

    fn alert(&self, message: &str);
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
#[error("Element with id {0:?} is missing from the document")]
pub struct MissingElementError(pub String);

#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct ElementIds {
    pub title_input: String,
    pub body_input: String,
    pub posts_container: String,
    pub submit_button: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            title_input: "new-post-title".to_owned(),
            body_input: "new-post-body".to_owned(),
            posts_container: "posts".to_owned(),
            submit_button: "add-post".to_owned(),
        }
    }
}

impl ElementIds {
    #[must_use]
    pub fn all(&self) -> impl Iterator<Item = &str> {
        [
            &self.title_input,
            &self.body_input,
            &self.posts_container,
            &self.submit_button,
        ]
        .into_iter()
        .map(String::as_str)
    }
}

/// Element handles resolved once at startup.
#[derive(Clone, Debug)]
pub struct BoundElements<E> {
    pub title_input: E,
    pub body_input: E,
    pub posts_container: E,
    pub submit_button: E,
}

impl<E> BoundElements<E> {
    pub fn bind<D>(dom: &D, ids: &ElementIds) -> Result<Self, MissingElementError>
    where
        D: Dom<Element = E>,
    {
        let lookup = |id: &str| {
            dom.element_by_id(id)
                .ok_or_else(|| MissingElementError(id.to_owned()))
        };

        Ok(Self {
            title_input: lookup(&ids.title_input)?,
            body_input: lookup(&ids.body_input)?,
            posts_container: lookup(&ids.posts_container)?,
            submit_button: lookup(&ids.submit_button)?,
        })
    }
}
