pub mod extraction;
pub mod observability;
pub mod pdf;
pub mod providers;
pub mod web;
