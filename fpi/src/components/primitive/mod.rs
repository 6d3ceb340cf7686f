pub(crate) mod divider;
pub(crate) mod icon_button;
