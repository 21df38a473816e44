//! Named component access.
//!
//! A [`Vector`] with 2 to 4 components dereferences to one of the `#[repr(C)]` structs below,
//! whose fields overlay its array storage one-to-one. Each of those in turn dereferences to the
//! same layout with color names, so `v.x` and `v.r` (and `v[0]`) are all the same component.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

/// Field view of a [`Vec2`][crate::Vec2].
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // only obtainable by dereferencing a vector
}

/// Field view of a [`Vec3`][crate::Vec3].
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

/// Field view of a [`Vec4`][crate::Vec4].
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

/// Color-named field view of a [`Vec2`][crate::Vec2].
#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (),
}

/// Color-named field view of a [`Vec3`][crate::Vec3].
#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

/// Color-named field view of a [`Vec4`][crate::Vec4].
///
/// The fourth component is reachable both as `a` (here) and as `w` (on [`XYZW`]).
#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

// SAFETY (all impls below): source and target are `repr(transparent)` / `repr(C)` sequences of
// exactly the same number of `T`s (`()` is a ZST and adds no padding), so the layouts match.
macro_rules! views {
    ($($src:ty => $dest:ident;)+) => {
        $(
            impl<T> Deref for $src {
                type Target = $dest<T>;

                #[inline]
                fn deref(&self) -> &$dest<T> {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for $src {
                #[inline]
                fn deref_mut(&mut self) -> &mut $dest<T> {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    Vector<T, 2> => XY;
    Vector<T, 3> => XYZ;
    Vector<T, 4> => XYZW;
    XY<T> => RG;
    XYZ<T> => RGB;
    XYZW<T> => RGBA;
}

#[cfg(test)]
mod tests {
    use std::mem::{align_of, size_of};

    use super::*;
    use crate::{vec3, Vec4};

    #[test]
    fn layouts_match() {
        assert_eq!(size_of::<XY<f64>>(), size_of::<Vector<f64, 2>>());
        assert_eq!(size_of::<RGB<u8>>(), size_of::<Vector<u8, 3>>());
        assert_eq!(size_of::<XYZW<f32>>(), size_of::<Vector<f32, 4>>());
        assert_eq!(align_of::<RGBA<u16>>(), align_of::<Vector<u16, 4>>());
    }

    #[test]
    fn aliases_share_storage() {
        let mut v = vec3(1, 2, 3);
        v.z = 30;
        assert_eq!(v.b, 30);
        v.g += 100;
        assert_eq!(v.y, 102);
        assert_eq!(v, [1, 102, 30]);

        let mut c = Vec4::<f32>::ZERO;
        c.a = 0.5;
        assert_eq!(c.w, 0.5);
        assert_eq!(c[3], 0.5);
    }
}
