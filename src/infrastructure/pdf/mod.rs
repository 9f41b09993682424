mod composer;

pub use composer::{compose_pdf, plan_pages, wrap_text, ComposeError, PageLayout};
