mod concatenate;
mod core;
mod lu;
mod lu_solve;
mod matrix_math;
mod types;

pub use self::concatenate::*;
pub use self::lu::*;
pub use self::lu_solve::*;
pub use self::matrix_math::*;
pub use self::types::*;
