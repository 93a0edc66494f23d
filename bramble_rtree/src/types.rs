// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive n-dimensional geometry types: [`Point`] and [`Rect`].

use alloc::vec::Vec;

#[cfg(feature = "std")]
#[inline]
fn sqrt(v: f64) -> f64 {
    v.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn sqrt(v: f64) -> f64 {
    libm::sqrt(v)
}

/// A point in n-dimensional space, fixed dimension at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a point from its coordinate vector.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along `axis`.
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    /// All coordinates as a slice.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Componentwise minimum of two points of equal dimension.
    pub fn component_min(a: &Self, b: &Self) -> Self {
        assert_eq!(a.dim(), b.dim(), "point dimension mismatch");
        Self::new(
            a.coords
                .iter()
                .zip(&b.coords)
                .map(|(&x, &y)| if y < x { y } else { x })
                .collect(),
        )
    }

    /// Componentwise maximum of two points of equal dimension.
    pub fn component_max(a: &Self, b: &Self) -> Self {
        assert_eq!(a.dim(), b.dim(), "point dimension mismatch");
        Self::new(
            a.coords
                .iter()
                .zip(&b.coords)
                .map(|(&x, &y)| if y > x { y } else { x })
                .collect(),
        )
    }

    /// Smallest coordinate across all dimensions.
    pub fn min_coord(&self) -> f64 {
        assert!(self.dim() >= 1, "point has no coordinates");
        self.coords.iter().copied().fold(f64::MAX, f64::min)
    }

    /// Largest coordinate across all dimensions.
    pub fn max_coord(&self) -> f64 {
        assert!(self.dim() >= 1, "point has no coordinates");
        self.coords.iter().copied().fold(f64::MIN, f64::max)
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_sq(&self, other: &Self) -> f64 {
        assert_eq!(self.dim(), other.dim(), "point dimension mismatch");
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| (a - b) * (a - b))
            .sum()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        sqrt(self.distance_sq(other))
    }

    /// MINDIST: squared minimum distance from this point to the rectangle's
    /// surface, 0 if the point lies inside.
    pub fn min_dist_sq(&self, r: &Rect) -> f64 {
        r.min_dist_sq(self)
    }

    /// MINMAXDIST: an upper bound on the squared distance from this point to
    /// the closest object guaranteed to lie within `r`.
    ///
    /// Per dimension, the near and far corners are picked relative to the
    /// rectangle's center; the squared near-corner distances are summed, and
    /// for each dimension in turn the far-corner term is substituted. The
    /// minimum such total is returned.
    pub fn min_max_dist_sq(&self, r: &Rect) -> f64 {
        assert!(self.dim() >= 1, "point has no coordinates");
        assert_eq!(self.dim(), r.dim(), "point/rect dimension mismatch");

        let mut near = Vec::with_capacity(self.dim());
        let mut far = Vec::with_capacity(self.dim());
        for i in 0..self.dim() {
            let p = self.coord(i);
            let lo = r.lo.coord(i);
            let hi = r.hi.coord(i);
            let mid = (lo + hi) / 2.0;

            let near_corner = if p <= mid { lo } else { hi };
            near.push((p - near_corner) * (p - near_corner));

            let far_corner = if p >= mid { lo } else { hi };
            far.push((p - far_corner) * (p - far_corner));
        }

        let near_total: f64 = near.iter().sum();
        let mut best = f64::MAX;
        for i in 0..self.dim() {
            let candidate = near_total - near[i] + far[i];
            if candidate <= best {
                best = candidate;
            }
        }
        best
    }

    /// Normalize each coordinate into `[0, 1]` relative to `bounds`, leaving
    /// coordinates untouched along dimensions where the extent is zero.
    pub fn rescale(&mut self, bounds: &Rect) {
        assert_eq!(self.dim(), bounds.dim(), "point/rect dimension mismatch");
        for i in 0..self.coords.len() {
            let offset = bounds.lo.coord(i);
            let length = bounds.hi.coord(i) - offset;
            self.coords[i] -= offset;
            if length > 0.0 {
                self.coords[i] /= length;
            }
        }
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

/// An axis-aligned box in n-dimensional space: a pair of corner points with
/// `lo[i] <= hi[i]` on every axis.
///
/// [`Rect::empty`] is the zero-dimension sentinel used as the identity for
/// [`Rect::enlarge`]; it becomes well-formed on the first enlargement. A rect
/// may be degenerate (`lo == hi`), representing a point.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    lo: Point,
    hi: Point,
}

impl Rect {
    /// Create a rect spanning two corner points; the corners need not be
    /// ordered, the componentwise min/max is taken.
    pub fn new(a: Point, b: Point) -> Self {
        assert!(a.dim() >= 1, "rect corners must have at least one dimension");
        assert_eq!(a.dim(), b.dim(), "rect corner dimension mismatch");
        let lo = Point::component_min(&a, &b);
        let hi = Point::component_max(&a, &b);
        Self { lo, hi }
    }

    /// A degenerate rect covering exactly one point.
    pub fn from_point(p: Point) -> Self {
        assert!(p.dim() >= 1, "rect corners must have at least one dimension");
        Self { lo: p.clone(), hi: p }
    }

    /// The uninitialized zero-dimension sentinel.
    pub fn empty() -> Self {
        Self {
            lo: Point::new(Vec::new()),
            hi: Point::new(Vec::new()),
        }
    }

    /// True for the zero-dimension sentinel.
    pub fn is_empty(&self) -> bool {
        self.lo.dim() == 0
    }

    /// Number of dimensions (0 for the empty sentinel).
    pub fn dim(&self) -> usize {
        self.lo.dim()
    }

    /// The minimum corner.
    pub fn lo(&self) -> &Point {
        &self.lo
    }

    /// The maximum corner.
    pub fn hi(&self) -> &Point {
        &self.hi
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: usize) -> f64 {
        self.hi.coord(axis) - self.lo.coord(axis)
    }

    fn assert_pair(&self, dim: usize) {
        assert!(self.dim() >= 1, "rect used before initialization");
        assert_eq!(self.dim(), dim, "rect dimension mismatch");
    }

    /// Whether this rect intersects `r` (shared boundaries count).
    pub fn intersects(&self, r: &Self) -> bool {
        self.assert_pair(r.dim());
        for i in 0..self.dim() {
            if r.lo.coord(i) > self.hi.coord(i) || r.hi.coord(i) < self.lo.coord(i) {
                return false;
            }
        }
        true
    }

    /// Whether this rect fully contains `r`.
    pub fn contains(&self, r: &Self) -> bool {
        self.assert_pair(r.dim());
        for i in 0..self.dim() {
            if r.hi.coord(i) > self.hi.coord(i) || r.lo.coord(i) < self.lo.coord(i) {
                return false;
            }
        }
        true
    }

    /// Whether this rect is fully contained by `r`.
    pub fn contained_by(&self, r: &Self) -> bool {
        self.assert_pair(r.dim());
        r.contains(self)
    }

    /// Whether any side of this rect lies exactly on the matching side of `r`.
    pub fn edge_overlaps(&self, r: &Self) -> bool {
        self.assert_pair(r.dim());
        for i in 0..self.dim() {
            if r.lo.coord(i) == self.lo.coord(i) || r.hi.coord(i) == self.hi.coord(i) {
                return true;
            }
        }
        false
    }

    /// Volume of the rect: the product of its extents (1.0 at zero dims).
    pub fn area(&self) -> f64 {
        (0..self.dim()).map(|i| self.extent(i)).product()
    }

    /// Grow in place to cover the point. Enlarging the empty sentinel yields
    /// the degenerate rect at `p`.
    pub fn enlarge_point(&mut self, p: &Point) {
        if self.is_empty() {
            self.lo = p.clone();
            self.hi = p.clone();
            return;
        }
        assert_eq!(self.dim(), p.dim(), "rect/point dimension mismatch");
        self.lo = Point::component_min(&self.lo, p);
        self.hi = Point::component_max(&self.hi, p);
    }

    /// Grow in place to cover `r`. Enlarging the empty sentinel yields `r`.
    /// Does not propagate to any container; callers owning a hierarchy must.
    pub fn enlarge(&mut self, r: &Self) {
        if !self.is_empty() {
            assert_eq!(self.dim(), r.dim(), "rect dimension mismatch");
        }
        self.enlarge_point(&r.lo);
        self.enlarge_point(&r.hi);
    }

    /// The smallest rect covering both this rect and `r`.
    pub fn union(&self, r: &Self) -> Self {
        self.assert_pair(r.dim());
        let mut u = self.clone();
        u.enlarge(r);
        u
    }

    /// The area by which this rect would grow to absorb `r`: the marginal
    /// cost used for subtree selection and split tie-breaking.
    pub fn enlargement(&self, r: &Self) -> f64 {
        self.assert_pair(r.dim());
        self.union(r).area() - self.area()
    }

    /// MINDIST: squared minimum distance from `p` to this rect's surface,
    /// 0 if `p` lies inside.
    pub fn min_dist_sq(&self, p: &Point) -> f64 {
        self.assert_pair(p.dim());
        let mut total = 0.0;
        for i in 0..self.dim() {
            let c = p.coord(i);
            if c < self.lo.coord(i) {
                let d = self.lo.coord(i) - c;
                total += d * d;
            } else if c > self.hi.coord(i) {
                let d = c - self.hi.coord(i);
                total += d * d;
            }
        }
        total
    }

    /// Distance from `p` to this rect, 0 if `p` lies inside.
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        sqrt(self.min_dist_sq(p))
    }

    /// Squared distance between the nearest corners of two rects, 0 when
    /// they overlap.
    pub fn distance_sq(&self, r: &Self) -> f64 {
        self.assert_pair(r.dim());
        let mut total = 0.0;
        for i in 0..self.dim() {
            let greatest_lo = self.lo.coord(i).max(r.lo.coord(i));
            let least_hi = self.hi.coord(i).min(r.hi.coord(i));
            if greatest_lo > least_hi {
                let d = greatest_lo - least_hi;
                total += d * d;
            }
        }
        total
    }

    /// Distance between two rects, 0 when they overlap.
    pub fn distance(&self, r: &Self) -> f64 {
        sqrt(self.distance_sq(r))
    }

    /// Normalize both corners into `[0, 1]` relative to `bounds`.
    pub fn rescale(&mut self, bounds: &Rect) {
        assert_eq!(self.dim(), bounds.dim(), "rect dimension mismatch");
        self.lo.rescale(bounds);
        self.hi.rescale(bounds);
    }
}
