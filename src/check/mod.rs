pub mod instance;
pub mod registry;
pub mod traits;

pub use instance::CheckInstance;
pub use registry::CheckRegistry;
pub use traits::Check;
