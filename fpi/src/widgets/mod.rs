pub(crate) mod chrome;
pub(crate) mod input;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod toast;
