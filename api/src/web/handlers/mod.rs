// delicia_api/src/web/handlers/mod.rs

pub mod contact_handlers;
pub mod product_handlers;
