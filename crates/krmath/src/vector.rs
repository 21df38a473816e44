use std::{array, fmt, slice};

use crate::{
    traits::{Float, Number},
    Error, One, Result, Zero,
};

mod ops;
mod swizzle;
mod view;

pub use swizzle::Swizzle;
pub use view::*;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-component vector storing elements of type `T`.
///
/// A [`Vector`] is exactly an `[T; N]`: no hidden fields, no padding, no heap allocation. Copying
/// one copies its components.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from components.
/// - [`Vector::from_xy`] and [`Vector::from_xyz`] set the first 2 or 3 components of a vector of
///   any (large enough) dimension and zero the rest.
/// - [`Vector::splat`] copies a value into each component, [`Vector::from_fn`] invokes a closure
///   with the index of each component.
/// - Vectors can be created from arrays with [`From`], and from slices with [`TryFrom`].
/// - [`Default`] initializes each component with its default value (0 for numbers), as does
///   [`Vector::ZERO`].
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   unit vectors pointing in the given direction.
///
/// # Component Access
///
/// - For vectors with 2 to 4 dimensions, components can be accessed as fields `x`, `y`, `z` and
///   `w`, or through the color aliases `r`, `g`, `b` and `a`. These are views onto the same
///   storage as the index operator: `v.x` and `v[0]` always refer to the same value.
/// - The [`Index`] and [`IndexMut`] impls are the default way of accessing components by position.
///   Like with arrays, they panic if the index is out of range.
/// - [`Vector::get`] and [`Vector::try_get`] are checked alternatives returning an [`Option`] or a
///   [`Result`], and [`Vector::get_unchecked`] skips the bounds check entirely.
/// - [`Vector::swizzle2`] and friends, as well as named accessors like `xy()` or `zyx()`, create
///   read-only [`Swizzle`] views selecting some of the components.
///
/// # Operations
///
/// Component-wise addition and subtraction, negation, and multiplication with a scalar (in either
/// order) are available through the usual operators. Geometric operations are provided as
/// methods, and mirrored as free functions ([`dot`], [`angle_between`], [`reflect`], [`project`],
/// [`reject`], [`cross`]).
///
/// Operations that divide by a vector's magnitude don't check for zero-length inputs and produce
/// NaN or infinite components instead. The `try_*` variants report [`Error::DegenerateVector`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each component initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

struct MinDim<const N: usize, const MIN: usize>;

impl<const N: usize, const MIN: usize> MinDim<N, MIN> {
    const OK: () = assert!(N >= MIN, "vector has too few components for this constructor");
}

impl<T, const N: usize> Vector<T, N> {
    /// The number of components of this vector type.
    pub const DIM: usize = N;

    /// Creates a vector whose first two components are `x` and `y`, and whose remaining components
    /// are zero.
    ///
    /// Using this with a vector type of fewer than 2 components is a compile-time error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = Vector::<f32, 4>::from_xy(1.0, 2.0);
    /// assert_eq!(v, [1.0, 2.0, 0.0, 0.0]);
    /// ```
    ///
    /// ```compile_fail
    /// # use krmath::*;
    /// let v = Vector::<f32, 1>::from_xy(1.0, 2.0);
    /// ```
    pub fn from_xy(x: T, y: T) -> Self
    where
        T: Zero,
    {
        let () = MinDim::<N, 2>::OK;
        let mut v = Self::from_fn(|_| T::ZERO);
        v.0[0] = x;
        v.0[1] = y;
        v
    }

    /// Creates a vector whose first three components are `x`, `y` and `z`, and whose remaining
    /// components are zero.
    ///
    /// Using this with a vector type of fewer than 3 components is a compile-time error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = Vector::<i32, 3>::from_xyz(1, 2, 3);
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    ///
    /// ```compile_fail
    /// # use krmath::*;
    /// let v = Vector::<i32, 2>::from_xyz(1, 2, 3);
    /// ```
    pub fn from_xyz(x: T, y: T, z: T) -> Self
    where
        T: Zero,
    {
        let () = MinDim::<N, 3>::OK;
        let mut v = Self::from_fn(|_| T::ZERO);
        v.0[0] = x;
        v.0[1] = y;
        v.0[2] = z;
        v
    }

    /// Creates a vector with each component initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each component is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = Vector::from_fn(|i| i * 10);
    /// assert_eq!(v, vec3(0, 10, 20));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each component, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original components.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        self.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("both vectors have N components"),
        })
    }

    /// Returns an iterator over references to the components.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a reference to the underlying components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a reference to the underlying components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying components as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an array of its components.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the component at `index`, or [`None`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the component at `index`, or [`None`] if `index >= N`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the component at `index`, or [`Error::IndexOutOfRange`] if
    /// `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.try_get(2), Ok(&3.0));
    /// assert_eq!(v.try_get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.0.get(index).ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the component at `index`, or [`Error::IndexOutOfRange`] if
    /// `index >= N`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Returns a reference to the component at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        self.0.get_unchecked(index)
    }

    /// Returns a mutable reference to the component at `index`, without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        self.0.get_unchecked_mut(index)
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the dot product of `self` and `other`.
    ///
    /// The dot product is commutative, and linear in both arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(5, 3).dot(vec2(2, 3)), 19);
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared magnitude of this vector, which is its dot product with itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(3, 4).sqr_magnitude(), 25);
    /// ```
    #[doc(alias = "length2")]
    pub fn sqr_magnitude(self) -> T {
        self.dot(self)
    }

    /// Reflects this vector about the direction `normal`.
    ///
    /// Computes `self - 2 * self.dot(normal) * normal`. `normal` should have unit length for the
    /// result to be a mirror image of `self`; it is not normalized by this method.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(1.0, 2.0).reflect(vec2(1.0, 0.0)), vec2(-1.0, 2.0));
    /// assert_eq!(vec3(1, -1, 0).reflect(Vec3::Y), vec3(1, 1, 0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        let two = T::ONE + T::ONE;
        self - normal * (two * self.dot(normal))
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// assert_eq!(Vec3f::Z.magnitude(), 1.0);
    /// ```
    #[doc(alias = "length", alias = "norm")]
    pub fn magnitude(self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Returns a copy of this vector scaled to unit length.
    ///
    /// If the magnitude of `self` is zero, the result has non-finite components. Use
    /// [`Vector::try_normalized`] to check for that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let v = vec3(0.0, 0.0, 4.0);
    /// assert_eq!(v.normalized(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(v, vec3(0.0, 0.0, 4.0));
    /// ```
    #[must_use]
    pub fn normalized(self) -> Self {
        self * (T::ONE / self.magnitude())
    }

    /// Scales this vector to unit length in place, and returns a reference to it.
    ///
    /// Like [`Vector::normalized`], this produces non-finite components for a zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// let mut v = vec2(0.0, -2.5);
    /// assert_eq!(*v.normalize(), vec2(0.0, -1.0));
    /// assert_eq!(v, vec2(0.0, -1.0));
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let scale = T::ONE / self.magnitude();
        *self = *self * scale;
        self
    }

    /// Returns a copy of this vector scaled to unit length, or [`Error::DegenerateVector`] if its
    /// magnitude is zero.
    pub fn try_normalized(self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            log::trace!("cannot normalize a vector of zero magnitude");
            return Err(Error::DegenerateVector);
        }
        Ok(self * (T::ONE / magnitude))
    }

    /// Computes the unsigned angle between `self` and `other`, in radians.
    ///
    /// The result lies in `[0, π]`. The cosine is clamped to `[-1, 1]` before taking the
    /// arccosine, so (nearly) parallel vectors yield 0 or π rather than NaN. Both vectors must have
    /// non-zero magnitude: if either is zero the result is NaN. Use
    /// [`Vector::try_angle_between`] to get an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use krmath::*;
    /// use std::f32::consts::{FRAC_PI_2, PI};
    ///
    /// assert_relative_eq!(Vec2f::X.angle_between(Vec2f::Y), FRAC_PI_2);
    /// assert_relative_eq!(Vec2f::X.angle_between(-Vec2f::X), PI);
    /// ```
    pub fn angle_between(self, other: Self) -> T {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        clamp_cos(cos).acos()
    }

    /// Computes the angle between `self` and `other`, or returns [`Error::DegenerateVector`] if
    /// either has zero magnitude.
    pub fn try_angle_between(self, other: Self) -> Result<T> {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == T::ZERO {
            log::trace!("cannot compute the angle to or from a vector of zero magnitude");
            return Err(Error::DegenerateVector);
        }
        Ok(clamp_cos(self.dot(other) / magnitudes).acos())
    }

    /// Projects this vector onto the direction of `onto`.
    ///
    /// Computes `(self.dot(onto) / onto.dot(onto)) * onto`, the component of `self` that is
    /// parallel to `onto`. `onto` does not need to have unit length, but must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(3.0, 5.0).project(vec2(2.0, 0.0)), vec2(3.0, 0.0));
    /// ```
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Like [`Vector::project`], but returns [`Error::DegenerateVector`] if `onto` is zero.
    pub fn try_project(self, onto: Self) -> Result<Self> {
        let divisor = onto.dot(onto);
        if divisor == T::ZERO {
            log::trace!("cannot project onto a vector of zero magnitude");
            return Err(Error::DegenerateVector);
        }
        Ok(onto * (self.dot(onto) / divisor))
    }

    /// Returns the component of this vector that is orthogonal to `onto`.
    ///
    /// This is `self - self.project(onto)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(3.0, 5.0).reject(vec2(2.0, 0.0)), vec2(0.0, 5.0));
    /// ```
    pub fn reject(self, onto: Self) -> Self {
        self - self.project(onto)
    }

    /// Like [`Vector::reject`], but returns [`Error::DegenerateVector`] if `onto` is zero.
    pub fn try_reject(self, onto: Self) -> Result<Self> {
        Ok(self - self.try_project(onto)?)
    }
}

/// Clamps a cosine computed from rounded values back into `[-1, 1]`. NaN is passed through.
fn clamp_cos<T: Float>(cos: T) -> T {
    if cos > T::ONE {
        T::ONE
    } else if cos < -T::ONE {
        -T::ONE
    } else {
        cos
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }

    /// Computes the 2D cross product ("perp dot product") of `self` and `other`.
    ///
    /// This is the Z component of the 3D cross product of both vectors extended with a zero Z
    /// component: `self.x * other.y - self.y * other.x`. It is positive if `other` points
    /// counterclockwise of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.cross(Vec2f::X), -1.0);
    /// assert_eq!(vec2(2, 3).cross(vec2(4, 6)), 0);
    /// ```
    #[doc(alias = "perp_dot")]
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [x0, y0] = self.0;
        let [x1, y1] = other.0;
        x0 * y1 - x1 * y0
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last component of this vector, yielding a vector with 2 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).truncate(), vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Computes the (right-handed) cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use krmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// assert_eq!(vec3(1, 3, 4).cross(vec3(5, 2, 3)), vec3(1, 17, -13));
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [x0, y0, z0] = self.0;
        let [x1, y1, z1] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            y0 * z1 - z0 * y1,
            z0 * x1 - x0 * z1,
            x0 * y1 - y0 * x1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last component of this vector, yielding a vector with 3 dimensions.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

/// Vectors that have a cross product.
///
/// Implemented for 2- and 3-dimensional vectors only. The 2D cross product is a scalar, the 3D one
/// is a vector, hence the associated [`Cross::Output`] type. Used by the free function [`cross`].
pub trait Cross {
    type Output;

    fn cross(self, other: Self) -> Self::Output;
}

impl<T: Number> Cross for Vector<T, 2> {
    type Output = T;

    #[inline]
    fn cross(self, other: Self) -> T {
        Vector::<T, 2>::cross(self, other)
    }
}

impl<T: Number> Cross for Vector<T, 3> {
    type Output = Self;

    #[inline]
    fn cross(self, other: Self) -> Self {
        Vector::<T, 3>::cross(self, other)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    /// Copies the components out of `slice`, which must have exactly `N` elements.
    fn try_from(slice: &[T]) -> Result<Self> {
        let array = <[T; N]>::try_from(slice).map_err(|_| Error::DimensionMismatch {
            expected: N,
            found: slice.len(),
        })?;
        Ok(Self(array))
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Vec2`] from its two components.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three components.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four components.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Computes the dot product of `lhs` and `rhs`. See [`Vector::dot`].
#[inline]
pub fn dot<T: Number, const N: usize>(lhs: Vector<T, N>, rhs: Vector<T, N>) -> T {
    lhs.dot(rhs)
}

/// Computes the angle between `lhs` and `rhs`, in radians. See [`Vector::angle_between`].
#[inline]
pub fn angle_between<T: Float, const N: usize>(lhs: Vector<T, N>, rhs: Vector<T, N>) -> T {
    lhs.angle_between(rhs)
}

/// Reflects `incoming` about `normal`. See [`Vector::reflect`].
#[inline]
pub fn reflect<T: Number, const N: usize>(
    incoming: Vector<T, N>,
    normal: Vector<T, N>,
) -> Vector<T, N> {
    incoming.reflect(normal)
}

/// Returns the component of `u` orthogonal to `v`. See [`Vector::reject`].
#[inline]
pub fn reject<T: Float, const N: usize>(u: Vector<T, N>, v: Vector<T, N>) -> Vector<T, N> {
    u.reject(v)
}

/// Projects `u` onto the direction of `v`. See [`Vector::project`].
#[inline]
pub fn project<T: Float, const N: usize>(u: Vector<T, N>, v: Vector<T, N>) -> Vector<T, N> {
    u.project(v)
}

/// Computes the cross product of `lhs` and `rhs`.
///
/// Only available for 2- and 3-dimensional vectors; see [`Cross`].
///
/// # Examples
///
/// ```
/// # use krmath::*;
/// assert_eq!(cross(vec2(1, 0), vec2(0, 1)), 1);
/// assert_eq!(cross(vec3(1, 0, 0), vec3(0, 1, 0)), vec3(0, 0, 1));
/// ```
///
/// ```compile_fail
/// # use krmath::*;
/// cross(vec4(1, 0, 0, 0), vec4(0, 1, 0, 0));
/// ```
#[inline]
pub fn cross<V: Cross>(lhs: V, rhs: V) -> V::Output {
    lhs.cross(rhs)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W.a, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!((v.x, v.y), (0, 1));
        assert_eq!((v.r, v.g), (0, 1));
        assert_eq!((v[0], v[1]), (0, 1));

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v.g, 9);
        v.y = -3;
        assert_eq!(v, [777, -3]);

        let mut v = vec4(1, 2, 3, 4);
        v.b = 30;
        v.w = 40;
        assert_eq!(v, [1, 2, 30, 40]);
        assert_eq!((v.z, v.a), (30, 40));
    }

    #[test]
    fn checked_access() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.get(0), Some(&1));
        assert_eq!(v.get(3), None);
        assert_eq!(v.try_get(1), Ok(&2));
        assert_eq!(
            v.try_get(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );

        *v.try_get_mut(2).unwrap() = 33;
        *v.get_mut(0).unwrap() = 11;
        assert_eq!(v, [11, 2, 33]);
        assert!(v.try_get_mut(3).is_err());

        // SAFETY: in range
        assert_eq!(unsafe { *v.get_unchecked(2) }, 33);
        unsafe { *v.get_unchecked_mut(1) = 22 };
        assert_eq!(v, [11, 22, 33]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = vec2(1.0, 2.0);
        let i = v.iter().count();
        let _ = v[i];
    }

    #[test]
    fn construction() {
        assert_eq!(Vec3d::default(), Vec3d::ZERO);
        assert_eq!(Vector::<i32, 5>::default(), [0; 5]);
        assert_eq!(Vector::<f64, 5>::from_xy(1.0, 2.0), [1.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(Vector::<u8, 3>::from_xyz(7, 8, 9), vec3(7, 8, 9));
        assert_eq!(Vec2::from_xy(1, 2), vec2(1, 2));
        assert_eq!(Vector::from([1, 2, 3, 4]), vec4(1, 2, 3, 4));
        assert_eq!(<[i32; 2]>::from(vec2(1, 2)), [1, 2]);
        assert_eq!(Vec4::<i32>::DIM, 4);
        assert_eq!(Vector::<f32, 7>::DIM, 7);

        let original = vec3(1, 2, 3);
        let mut copy = original;
        copy.x = 10;
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [10, 2, 3]);
    }

    #[test]
    fn try_from_slice() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Vec3d::try_from(&data[..3]), Ok(vec3(1.0, 2.0, 3.0)));
        assert_eq!(
            Vec3d::try_from(&data[..]),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            Vec2d::try_from(&data[..0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn layout() {
        assert_eq!(std::mem::size_of::<Vec3f>(), 3 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<Vector<f64, 9>>(), 72);

        let v = vec4(1.0f32, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0 / 3.0)), "(0.50, 0.33)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec2(1u32, 2).dot(vec2(3, 4)), 11);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec2(1.0, 0.0).dot(vec2(1.0, 1.0)), 1.0);
        assert_eq!(super::dot(vec2(5.0, 3.0), vec2(2.0, 3.0)), 19.0);
    }

    #[test]
    fn magnitude() {
        let mut v = Vec3f::ZERO;
        v.x = 1.0;
        assert_eq!(v.magnitude(), 1.0);
        assert_eq!(v.sqr_magnitude(), 1.0);

        let v = vec2(1.0, 1.0);
        assert_relative_eq!(v.magnitude(), 2.0f64.sqrt());
        assert_eq!(v.sqr_magnitude(), 2.0);
        assert_eq!(vec4(1, 1, 1, 1).sqr_magnitude(), 4);
    }

    #[test]
    fn normalize() {
        let v = vec3(7.0f32, 4.0, 56.0);
        let n = v.normalized();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n * v.magnitude(), v, epsilon = 1e-4);
        assert_eq!(v, vec3(7.0, 4.0, 56.0));

        let mut v = vec2(1.0, 1.0);
        let magnitude = v.magnitude();
        let n = *v.normalize();
        assert_eq!(n, v);
        assert_abs_diff_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n * magnitude, vec2(1.0, 1.0), epsilon = 1e-12);

        let chained = *vec2(0.0, 4.0).normalize() * 2.0;
        assert_eq!(chained, vec2(0.0, 2.0));
    }

    #[test]
    fn normalize_zero() {
        assert!(Vec2d::ZERO.normalized().x.is_nan());
        assert_eq!(Vec2d::ZERO.try_normalized(), Err(Error::DegenerateVector));
        assert_eq!(vec2(0.0, -4.0).try_normalized(), Ok(vec2(0.0, -1.0)));
    }

    #[test]
    fn angle_between() {
        assert_relative_eq!(Vec2d::X.angle_between(-Vec2d::X), PI);
        assert_relative_eq!(Vec2d::X.angle_between(Vec2d::Y), FRAC_PI_2);
        assert_relative_eq!(Vec3d::Y.angle_between(Vec3d::Y), 0.0);
        assert_relative_eq!(vec2(0.0, 2.0).angle_between(vec2(-3.0, 0.0)), FRAC_PI_2);
        assert_abs_diff_eq!(vec2(1.0, 1.0).angle_between(Vec2d::X), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_free_function_uses_rhs() {
        let (a, b) = (Vec2d::X, Vec2d::Y);
        assert_relative_eq!(super::angle_between(a, b), FRAC_PI_2);
        assert_eq!(super::angle_between(a, b), a.angle_between(b));
        assert_relative_eq!(super::angle_between(a, -a), PI);
    }

    #[test]
    fn angle_between_parallel_is_not_nan() {
        let vectors = [
            vec3(0.1f32, 0.2, 0.3),
            vec3(1.0 / 3.0, 2.0 / 3.0, 0.7),
            vec3(-5.3, 0.01, 1e3),
            vec3(1e-3, 7.77, -2.2),
        ];
        for v in vectors {
            let same = v.angle_between(v);
            assert!(!same.is_nan(), "angle of {v:?} to itself is NaN");
            assert_abs_diff_eq!(same, 0.0, epsilon = 1e-3);

            let scaled = v.angle_between(v * 3.0);
            assert!(!scaled.is_nan(), "angle of {v:?} to a multiple is NaN");

            let opposite = v.angle_between(-v);
            assert!(!opposite.is_nan(), "angle of {v:?} to its inverse is NaN");
            assert_abs_diff_eq!(opposite, std::f32::consts::PI, epsilon = 1e-3);
        }
    }

    #[test]
    fn angle_between_zero_vector_is_nan() {
        assert!(Vec2d::ZERO.angle_between(Vec2d::X).is_nan());
        assert!(Vec2d::X.angle_between(Vec2d::ZERO).is_nan());
        assert!(Vec3f::ZERO.angle_between(Vec3f::ZERO).is_nan());
        assert!(super::angle_between(Vec4d::ZERO, Vec4d::W).is_nan());
    }

    #[test]
    fn clamp_cos() {
        assert_eq!(super::clamp_cos(1.0000001f32), 1.0);
        assert_eq!(super::clamp_cos(-1.5f64), -1.0);
        assert_eq!(super::clamp_cos(0.25f64), 0.25);
        assert!(super::clamp_cos(f64::NAN).is_nan());
    }

    #[test]
    fn try_angle_between() {
        assert_eq!(
            Vec3d::ZERO.try_angle_between(Vec3d::X),
            Err(Error::DegenerateVector)
        );
        assert_eq!(
            Vec3d::X.try_angle_between(Vec3d::ZERO),
            Err(Error::DegenerateVector)
        );
        assert_relative_eq!(Vec3d::X.try_angle_between(Vec3d::Z).unwrap(), FRAC_PI_2);
    }

    #[test]
    fn reflect() {
        assert_eq!(vec2(1.0, 2.0).reflect(vec2(1.0, 0.0)), vec2(-1.0, 2.0));
        assert_eq!(vec2(3.0, 2.0).reflect(vec2(1.0, 0.5)), vec2(-5.0, -2.0));
        assert_eq!(super::reflect(vec3(1, -1, 0), vec3(0, 1, 0)), vec3(1, 1, 0));
    }

    #[test]
    fn project_reject() {
        let u = vec3(1.0, 3.0, 4.0);
        let v = vec3(2.0, 3.0, 1.0);
        assert_abs_diff_eq!(u.project(v), vec3(2.143, 3.214, 1.071), epsilon = 0.001);
        assert_abs_diff_eq!(u.project(v), v * (15.0 / 14.0), epsilon = 1e-12);
        assert_abs_diff_eq!(u.reject(v).dot(v), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u.project(v) + u.reject(v), u, epsilon = 1e-12);
        assert_eq!(super::project(u, v), u.project(v));
        assert_eq!(super::reject(u, v), u.reject(v));

        // Projecting onto `v` divides by `v`'s magnitude, not `u`'s.
        assert_eq!(vec2(4.0, 4.0).project(vec2(0.5, 0.0)), vec2(4.0, 0.0));
    }

    #[test]
    fn try_project_reject() {
        let u = vec2(1.0, 2.0);
        assert_eq!(u.try_project(Vec2d::ZERO), Err(Error::DegenerateVector));
        assert_eq!(u.try_reject(Vec2d::ZERO), Err(Error::DegenerateVector));
        assert_eq!(u.try_project(Vec2d::Y), Ok(vec2(0.0, 2.0)));
        assert_eq!(u.try_reject(Vec2d::Y), Ok(vec2(1.0, 0.0)));
    }

    #[test]
    fn cross() {
        assert_eq!(vec2(1, 0).cross(vec2(0, 1)), 1);
        assert_eq!(vec2(2.0, 3.0).cross(vec2(-1.0, 4.0)), 11.0);
        assert_eq!(super::cross(vec2(-1.0, 4.0), vec2(2.0, 3.0)), -11.0);

        let a = vec3(1, 3, 4);
        let b = vec3(5, 2, 3);
        // y = a.z * b.x - a.x * b.z = 20 - 3
        assert_eq!(a.cross(b), vec3(1, 17, -13));
        assert_eq!(b.cross(a), -a.cross(b));
        assert_eq!(a.cross(b).dot(a), 0);
        assert_eq!(a.cross(b).dot(b), 0);
        assert_eq!(super::cross(a, b), a.cross(b));

        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn iter() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.iter().sum::<i32>(), 6);
        assert_eq!((&v).into_iter().count(), 3);
        assert_eq!(v.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(v.map(|c| c * 2), vec3(2, 4, 6));
        assert_eq!(v.zip(vec3('a', 'b', 'c')), vec3((1, 'a'), (2, 'b'), (3, 'c')));
    }
}
