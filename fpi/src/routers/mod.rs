pub(crate) mod chrome;
pub(crate) mod input;
pub(crate) mod keyboard;
pub(crate) mod navigation;
pub(crate) mod toast;
pub(crate) mod window;
