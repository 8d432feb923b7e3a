pub mod dollar_highlighter;
pub mod registration;
pub mod review_form;
pub mod star_rating;
pub mod toaster;
