use crate::{vec2, Vec2};

/// An integer rectangle.
pub type Recti = Rect<i32>;
/// A rectangle with [`f32`] coordinates.
pub type Rectf = Rect<f32>;
/// A rectangle with [`f64`] coordinates.
pub type Rectd = Rect<f64>;

/// An axis-aligned rectangle, described by the position of its origin corner and its extent.
///
/// This is a plain data holder. `width` and `height` may be negative, and nothing is checked.
///
/// # Examples
///
/// ```
/// # use krmath::*;
/// let r = Rectf::new(1.0, 2.0, 30.0, 40.0);
/// assert_eq!(r.position(), vec2(1.0, 2.0));
/// assert_eq!(r.size(), vec2(30.0, 40.0));
/// assert_eq!(Rect::from_position_size(r.position(), r.size()), r);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at `position` with extent `size`.
    pub fn from_position_size(position: Vec2<T>, size: Vec2<T>) -> Self {
        let [x, y] = position.into_array();
        let [width, height] = size.into_array();
        Self::new(x, y, width, height)
    }

    /// Returns the `(x, y)` position of this rectangle.
    pub fn position(&self) -> Vec2<T>
    where
        T: Copy,
    {
        vec2(self.x, self.y)
    }

    /// Returns the `(width, height)` extent of this rectangle.
    pub fn size(&self) -> Vec2<T>
    where
        T: Copy,
    {
        vec2(self.width, self.height)
    }
}
