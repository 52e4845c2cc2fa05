pub use derive_more;
pub use float_cmp::ApproxEq;
pub use itertools::*;
pub use thiserror::{self, Error};

pub use logging::{self, prelude::*, slog_value_debug, slog_value_display};

// misc imports that annoyingly get resolved to other pub exports of std/core
// https://github.com/intellij-rust/intellij-rust/issues/5654
pub use std::fmt::{Debug, Display};

pub type BoxedResult<T> = Result<T, Box<dyn std::error::Error>>;

pub use glam::{self, dvec2, DMat2};

/// Scalar used throughout the simulation
pub type F = f64;
pub type Vector2 = glam::DVec2;

pub mod vector;

#[macro_export]
macro_rules! some_or_return {
    ($opt:expr) => {
        match $opt {
            Some(v) => v,
            None => return,
        }
    };
}
