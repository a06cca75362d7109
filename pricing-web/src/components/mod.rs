pub mod catalog_card;
pub mod disclosure;
pub mod hero;
pub mod nav;
pub mod price_list;
pub mod qr_image;
pub mod qr_modal;
