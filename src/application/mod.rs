// Application layer - Use cases over site content
pub mod site_content;
pub mod site_service;
