pub mod controller;
pub mod feed;
pub mod state;
pub mod view;
