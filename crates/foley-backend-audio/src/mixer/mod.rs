//! Output types and the finishing stage every effect ends with.

mod processing;
mod types;

#[cfg(test)]
mod tests_finishing;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_types;

pub use processing::{
    finish, finish_mono, finish_stereo, normalize, tanh_limit, tanh_limit_buffer,
};
pub use types::{SfxOutput, StereoPair};
