pub(crate) mod page_card;
