pub(crate) mod app_bar;
