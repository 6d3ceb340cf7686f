pub(crate) mod model;
pub(crate) mod view;

pub(crate) use self::model::{PageKind, registry};
