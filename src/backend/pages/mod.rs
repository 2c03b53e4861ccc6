//! Plain pages: the home page, the flash form demo and the 404 page.

pub mod flash_demo;
pub mod home;
