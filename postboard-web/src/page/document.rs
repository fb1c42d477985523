use crate::page::dom::{Dom, InsertPosition};
use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{info, warn};

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct ElementHandle(Arc<str>);

impl ElementHandle {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ElementSnapshot {
    pub value: String,
    pub children: Vec<String>,
    pub disabled: bool,
}

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    children: VecDeque<String>,
    disabled: bool,
}

#[derive(Debug, Default)]
struct DocumentState {
    elements: HashMap<Arc<str>, ElementState>,
    alerts: Vec<String>,
}

/// An in-memory document holding a flat set of elements addressed by id.
///
/// Markup inserted into an element is kept as an ordered list of child
/// fragments rather than parsed.
#[derive(Debug, Default)]
pub struct Document {
    state: Mutex<DocumentState>,
}

impl Document {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (Arc::from(id.as_ref()), ElementState::default()))
            .collect();

        Self {
            state: Mutex::new(DocumentState {
                elements,
                alerts: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self, id: &str) -> Option<ElementSnapshot> {
        self.lock().elements.get(id).map(|element| ElementSnapshot {
            value: element.value.clone(),
            children: element.children.iter().cloned().collect(),
            disabled: element.disabled,
        })
    }

    /// Removes and returns all alerts raised since the last call.
    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_element<T>(
        &self,
        element: &ElementHandle,
        f: impl FnOnce(&mut ElementState) -> T,
    ) -> Option<T> {
        let mut state = self.lock();
        let result = state.elements.get_mut(element.id()).map(f);
        if result.is_none() {
            warn!(id = element.id(), "Element handle no longer resolves");
        }
        result
    }
}

impl Dom for Document {
    type Element = ElementHandle;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.lock()
            .elements
            .get_key_value(id)
            .map(|(key, _)| ElementHandle(Arc::clone(key)))
    }

    fn value(&self, element: &Self::Element) -> String {
        self.with_element(element, |state| state.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, element: &Self::Element, value: &str) {
        self.with_element(element, |state| value.clone_into(&mut state.value));
    }

    fn set_inner_html(&self, element: &Self::Element, html: &str) {
        self.with_element(element, |state| {
            state.children.clear();
            if !html.is_empty() {
                state.children.push_back(html.to_owned());
            }
        });
    }

    fn insert_adjacent_html(&self, element: &Self::Element, position: InsertPosition, html: &str) {
        self.with_element(element, |state| match position {
            InsertPosition::AfterBegin => state.children.push_front(html.to_owned()),
            InsertPosition::BeforeEnd => state.children.push_back(html.to_owned()),
        });
    }

    fn set_disabled(&self, element: &Self::Element, disabled: bool) {
        self.with_element(element, |state| state.disabled = disabled);
    }

    fn alert(&self, message: &str) {
        info!(alert = message, "Alert raised");
        self.lock().alerts.push(message.to_owned());
    }
}
