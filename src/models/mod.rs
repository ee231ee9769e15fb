pub mod image;
pub mod params;
pub mod requests;
pub mod response;
pub mod status;
pub mod styles;

pub use self::image::*;
pub use params::*;
pub use requests::*;
pub use response::*;
pub use status::*;
pub use styles::*;
