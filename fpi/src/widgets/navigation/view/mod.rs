pub(crate) mod dismiss_surface;
pub(crate) mod rail;
