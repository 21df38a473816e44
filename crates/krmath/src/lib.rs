//! A small generic vector math library.
//!
//! # Motivation
//!
//! Game and graphics code frequently needs a handful of value-type math primitives (points,
//! directions, colors, screen rectangles) without pulling in a full matrix and quaternion stack.
//! This library provides exactly that and nothing more.
//!
//! # Goals & Non-Goals
//!
//! - Vectors are fixed-size and stack-allocated. Dimensions are specified with const generics, so
//!   operations that only make sense for some dimensions (like [`Vector::cross`]) are rejected at
//!   compile time when used with the wrong one.
//! - A single, unpadded data layout: a [`Vector<T, N>`] is exactly `[T; N]`. Named fields (`x`,
//!   `y`, `z`, `w` and the color aliases `r`, `g`, `b`, `a`) are views onto that same storage.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - The default API does not report errors: preconditions (like "don't normalize a zero-length
//!   vector") are documented and left to the caller. Checked `try_*` variants returning [`Error`]
//!   exist for callers that prefer to handle those cases.
//! - No matrices, quaternions, transforms or SIMD.
//!
//! # Example
//!
//! ```
//! # use approx::assert_abs_diff_eq;
//! # use krmath::*;
//! let v: Vec3d = vec3(1.0, 3.0, 4.0);
//! let onto = vec3(2.0, 3.0, 1.0);
//!
//! let p = v.project(onto);
//! assert_abs_diff_eq!(p + v.reject(onto), v, epsilon = 1e-12);
//!
//! let yx: Vec2d = v.yx().into();
//! assert_eq!(yx, vec2(3.0, 1.0));
//! ```

mod error;
mod rect;
pub mod traits;
mod vector;

pub use error::*;
pub use rect::*;
pub use traits::{Float, Number, One, Zero};
pub use vector::*;
