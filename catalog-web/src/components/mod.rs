pub mod detail_view;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod item_card;
pub mod item_list;
pub mod modal;
pub mod review_form;
pub mod review_preview;
