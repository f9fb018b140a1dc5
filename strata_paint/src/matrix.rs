// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 3×3 transform.
//!
//! This type covers the subset of 2-D affine/projective transforms that the
//! compositor actually needs (identity, multiply, point and rect mapping,
//! a handful of constructors) without pulling in a full linear-algebra
//! crate.

use core::ops::Mul;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// A column-major 3×3 transform stored as `[[f64; 3]; 3]`.
///
/// Each inner array is one *column* of the matrix. Points map as column
/// vectors `[x, y, 1]`; the third row carries the projective terms, so the
/// type can represent perspective as well as affine transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    /// Three columns, each a 3-element array `[x, y, w]`.
    pub cols: [[f64; 3]; 3],
}

impl Matrix3 {
    /// The 3×3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Creates a transform from three column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(col0: [f64; 3], col1: [f64; 3], col2: [f64; 3]) -> Self {
        Self {
            cols: [col0, col1, col2],
        }
    }

    /// Creates a pure translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(dx: f64, dy: f64) -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [dx, dy, 1.0]],
        }
    }

    /// Creates a non-uniform scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            cols: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a counter-clockwise rotation (radians) about the origin.
    #[inline]
    #[must_use]
    pub fn from_rotation(radians: f64) -> Self {
        #[cfg(feature = "std")]
        let (s, c) = radians.sin_cos();
        #[cfg(not(feature = "std"))]
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a rotation (radians) about `pivot`.
    #[inline]
    #[must_use]
    pub fn from_rotation_about(radians: f64, pivot: Point) -> Self {
        Self::from_translation(pivot.x, pivot.y)
            * Self::from_rotation(radians)
            * Self::from_translation(-pivot.x, -pivot.y)
    }

    /// Creates a skew transform (`sx` shears x by y, `sy` shears y by x).
    #[inline]
    #[must_use]
    pub const fn from_skew(sx: f64, sy: f64) -> Self {
        Self {
            cols: [[1.0, sy, 0.0], [sx, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Maps a point through this transform, applying the perspective divide
    /// when the projective row is in play.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        let c = &self.cols;
        let x = c[0][0] * p.x + c[1][0] * p.y + c[2][0];
        let y = c[0][1] * p.x + c[1][1] * p.y + c[2][1];
        let w = c[0][2] * p.x + c[1][2] * p.y + c[2][2];
        if w == 1.0 || w == 0.0 {
            Point::new(x, y)
        } else {
            Point::new(x / w, y / w)
        }
    }

    /// Maps a rectangle through this transform and returns the axis-aligned
    /// bounding box of the four mapped corners.
    #[must_use]
    pub fn map_rect(&self, r: Rect) -> Rect {
        let corners = [
            self.map_point(Point::new(r.x0, r.y0)),
            self.map_point(Point::new(r.x1, r.y0)),
            self.map_point(Point::new(r.x1, r.y1)),
            self.map_point(Point::new(r.x0, r.y1)),
        ];
        let mut x0 = corners[0].x;
        let mut y0 = corners[0].y;
        let mut x1 = x0;
        let mut y1 = y0;
        for p in &corners[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Rect::new(x0, y0, x1, y1)
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        let c = &self.cols;
        c[0][0].is_finite()
            && c[0][1].is_finite()
            && c[0][2].is_finite()
            && c[1][0].is_finite()
            && c[1][1].is_finite()
            && c[1][2].is_finite()
            && c[2][0].is_finite()
            && c[2][1].is_finite()
            && c[2][2].is_finite()
    }

    /// Is any element of this transform [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        let c = &self.cols;
        c[0][0].is_nan()
            || c[0][1].is_nan()
            || c[0][2].is_nan()
            || c[1][0].is_nan()
            || c[1][1].is_nan()
            || c[1][2].is_nan()
            || c[2][0].is_nan()
            || c[2][1].is_nan()
            || c[2][2].is_nan()
    }
}

impl Default for Matrix3 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 3]; 3];
        let mut j = 0;
        while j < 3 {
            let mut i = 0;
            while i < 3 {
                out[j][i] = a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}
