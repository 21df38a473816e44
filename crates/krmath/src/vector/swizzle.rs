//! Read-only swizzle views.

use std::{fmt, ops::Index};

use crate::{Error, Result};

use super::Vector;

/// A read-only view selecting `K` components of a [`Vector<T, N>`], in a chosen order.
///
/// Swizzles are created by [`Vector::swizzle2`], [`Vector::swizzle3`] and [`Vector::swizzle4`],
/// or by the named accessors like `xy()`, `yx()`, `zyx()` or `wzyx()` available on vectors with 2
/// to 4 components. Indices are checked at compile time, so a swizzle never refers to a component
/// its source doesn't have.
///
/// A swizzle borrows its source and cannot be used to modify it. Use [`Swizzle::to_vector`] (or
/// [`From`]/[`Into`]) to copy the selected components into a new [`Vector<T, K>`].
///
/// # Examples
///
/// ```
/// # use krmath::*;
/// let v = vec4(1, 2, 3, 4);
///
/// let s = v.swizzle2::<3, 1>();
/// assert_eq!(s[0], 4);
/// assert_eq!(s.to_vector(), vec2(4, 2));
///
/// let rev: Vec4<i32> = v.wzyx().into();
/// assert_eq!(rev, [4, 3, 2, 1]);
/// ```
///
/// Out-of-range indices are rejected:
///
/// ```compile_fail
/// # use krmath::*;
/// let v = vec2(1, 2);
/// v.swizzle2::<0, 2>();
/// ```
///
/// Named accessors only exist where the components do:
///
/// ```compile_fail
/// # use krmath::*;
/// let v = vec2(1, 2);
/// v.xz();
/// ```
pub struct Swizzle<'a, T, const N: usize, const K: usize> {
    source: &'a Vector<T, N>,
    indices: [usize; K],
}

struct InBounds<const N: usize, const I: usize, const J: usize, const K: usize, const L: usize>;

impl<const N: usize, const I: usize, const J: usize, const K: usize, const L: usize>
    InBounds<N, I, J, K, L>
{
    const OK: () = assert!(
        I < N && J < N && K < N && L < N,
        "swizzle index out of range"
    );
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a view of the components at indices `I` and `J`.
    pub fn swizzle2<const I: usize, const J: usize>(&self) -> Swizzle<'_, T, N, 2> {
        let () = InBounds::<N, I, J, 0, 0>::OK;
        Swizzle::new(self, [I, J])
    }

    /// Creates a view of the components at indices `I`, `J` and `K`.
    pub fn swizzle3<const I: usize, const J: usize, const K: usize>(
        &self,
    ) -> Swizzle<'_, T, N, 3> {
        let () = InBounds::<N, I, J, K, 0>::OK;
        Swizzle::new(self, [I, J, K])
    }

    /// Creates a view of the components at indices `I`, `J`, `K` and `L`.
    pub fn swizzle4<const I: usize, const J: usize, const K: usize, const L: usize>(
        &self,
    ) -> Swizzle<'_, T, N, 4> {
        let () = InBounds::<N, I, J, K, L>::OK;
        Swizzle::new(self, [I, J, K, L])
    }
}

impl<'a, T, const N: usize, const K: usize> Swizzle<'a, T, N, K> {
    /// `indices` must all be less than `N`.
    fn new(source: &'a Vector<T, N>, indices: [usize; K]) -> Self {
        debug_assert!(indices.iter().all(|&i| i < N));
        Self { source, indices }
    }

    /// Returns the number of selected components, `K`.
    #[inline]
    pub const fn len(&self) -> usize {
        K
    }

    /// Returns `true` if this swizzle selects no components.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        K == 0
    }

    /// Returns the source indices this swizzle selects, in order.
    #[inline]
    pub fn indices(&self) -> [usize; K] {
        self.indices
    }

    /// Returns the `index`th selected component, or [`None`] if `index >= K`.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        let source = self.source;
        self.indices.get(index).map(|&i| &source[i])
    }

    /// Returns the `index`th selected component, or [`Error::IndexOutOfRange`] if `index >= K`.
    pub fn try_get(&self, index: usize) -> Result<&'a T> {
        self.get(index)
            .ok_or(Error::IndexOutOfRange { index, len: K })
    }

    /// Returns an iterator over the selected components, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let source = self.source;
        self.indices.into_iter().map(move |i| &source[i])
    }

    /// Copies the selected components into a new vector.
    pub fn to_vector(&self) -> Vector<T, K>
    where
        T: Copy,
    {
        let source = self.source;
        Vector(self.indices.map(|i| source[i]))
    }
}

impl<T, const N: usize, const K: usize> Clone for Swizzle<'_, T, N, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, const K: usize> Copy for Swizzle<'_, T, N, K> {}

/// Accesses the `index`th selected component.
///
/// # Panics
///
/// Panics if `index >= K`.
impl<T, const N: usize, const K: usize> Index<usize> for Swizzle<'_, T, N, K> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.source[self.indices[index]]
    }
}

impl<T: Copy, const N: usize, const K: usize> From<Swizzle<'_, T, N, K>> for Vector<T, K> {
    fn from(swizzle: Swizzle<'_, T, N, K>) -> Self {
        swizzle.to_vector()
    }
}

impl<T, U, const N: usize, const K: usize> PartialEq<Vector<U, K>> for Swizzle<'_, T, N, K>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, K>) -> bool {
        self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: fmt::Debug, const N: usize, const K: usize> fmt::Debug for Swizzle<'_, T, N, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Swizzle");
        for elem in self.iter() {
            tup.field(elem);
        }
        tup.finish()
    }
}

macro_rules! named_swizzles {
    ($n:literal { $($name:ident: $k:literal => [$($i:literal),+];)+ }) => {
        impl<T> Vector<T, $n> {
            $(
                #[doc = concat!("Returns a read-only `", stringify!($name), "` view of this vector.")]
                #[inline]
                pub fn $name(&self) -> Swizzle<'_, T, $n, $k> {
                    Swizzle::new(self, [$($i),+])
                }
            )+
        }
    };
}

named_swizzles!(2 {
    xy: 2 => [0, 1];
    yx: 2 => [1, 0];
});

named_swizzles!(3 {
    xy: 2 => [0, 1];
    yx: 2 => [1, 0];
    xz: 2 => [0, 2];
    zx: 2 => [2, 0];
    yz: 2 => [1, 2];
    zy: 2 => [2, 1];
    xyz: 3 => [0, 1, 2];
    xzy: 3 => [0, 2, 1];
    yxz: 3 => [1, 0, 2];
    yzx: 3 => [1, 2, 0];
    zxy: 3 => [2, 0, 1];
    zyx: 3 => [2, 1, 0];
});

named_swizzles!(4 {
    xy: 2 => [0, 1];
    yx: 2 => [1, 0];
    xz: 2 => [0, 2];
    zx: 2 => [2, 0];
    xw: 2 => [0, 3];
    wx: 2 => [3, 0];
    yz: 2 => [1, 2];
    zy: 2 => [2, 1];
    yw: 2 => [1, 3];
    wy: 2 => [3, 1];
    zw: 2 => [2, 3];
    wz: 2 => [3, 2];
    xyz: 3 => [0, 1, 2];
    zyx: 3 => [2, 1, 0];
    yzw: 3 => [1, 2, 3];
    wzy: 3 => [3, 2, 1];
    xyzw: 4 => [0, 1, 2, 3];
    wzyx: 4 => [3, 2, 1, 0];
});
