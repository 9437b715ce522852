pub mod shoe_service;

pub use shoe_service::ShoeService;
