pub mod chase;
pub mod traits;

pub mod prelude {
    pub use super::chase::prelude::*;
    pub use super::traits::Parser;
}
