//! Threshold secret reconstruction: decode base-N share ordinates into exact
//! big integers and recover the sharing polynomial's constant term by
//! Lagrange interpolation at x = 0.

pub mod case;
pub mod decode;
pub mod error;
pub mod shamir;

pub use case::{solve_case_file, Case};
pub use decode::{decode_value, encode_value};
pub use error::{CaseError, RecoverError};
pub use shamir::{reconstruct_secret, split_secret, Share};
