pub mod order_item;
pub mod promo;
pub mod review;
