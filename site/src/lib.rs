// everything the pages need that does not touch the browser: who the site is
// about, what it shows, and how the colour scheme is chosen
pub mod config;
pub mod content;
pub mod register;
pub mod theme;
