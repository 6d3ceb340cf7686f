pub(crate) mod toast_stack;
