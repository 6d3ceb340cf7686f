pub(crate) mod input_form;
