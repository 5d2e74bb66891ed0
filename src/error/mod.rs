mod gather;

pub use gather::GatherError;

pub type Result<T> = std::result::Result<T, GatherError>;
