use crate::model::Id;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct UserMarker;

/// Author id attached to every post submitted from the page.
pub const ANONYMOUS_USER: Id<UserMarker> = Id::new(0);
