pub mod memory;
pub mod repository;

pub use memory::InMemoryOtpRepository;
pub use repository::OtpRepository;
