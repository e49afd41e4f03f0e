pub mod demo;
pub mod home;
pub mod not_found;

pub use demo::DemoPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
