pub mod carousel;
pub mod counter;
pub mod filter;
pub mod form;
pub mod modal;
pub mod theme;
pub mod tour;
