// Data models shared by the plan generators and the API layer

pub mod nutrition;
pub mod plan;
pub mod profile;
pub mod workout;

pub use nutrition::*;
pub use plan::*;
pub use profile::*;
pub use workout::*;
