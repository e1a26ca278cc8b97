pub mod error;
pub mod models;
pub mod policy;
pub mod requests;
pub mod session;
pub mod storage;

pub use error::*;
pub use models::*;
pub use policy::*;
pub use requests::*;
pub use session::*;
pub use storage::*;
