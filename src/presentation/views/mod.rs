// Server-rendered views. Every view is a pure function of its inputs.
pub mod home;
pub mod html;
pub mod layout;
pub mod nav;
pub mod not_found;
pub mod station_analytics;
pub mod stylesheet;
