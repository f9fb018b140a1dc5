// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle arithmetic for paint-bounds propagation.
//!
//! The compositor accumulates bounds bottom-up starting from
//! [`Rect::ZERO`]. That seed is an *additive identity*, not a sentinel:
//! [`union`] ignores empty operands, so the first non-empty child always
//! dominates the seed instead of being stretched toward the origin.
//!
//! A rectangle is *empty* when its width or height is zero or negative.
//! [`intersect`] can produce such rectangles; callers test with
//! [`is_empty`] rather than normalizing.

use kurbo::Rect;

/// Returns `true` if `r` has zero or negative width or height.
#[inline]
#[must_use]
pub fn is_empty(r: Rect) -> bool {
    r.width() <= 0.0 || r.height() <= 0.0
}

/// Returns the tightest rectangle covering both operands, ignoring empty
/// operands.
///
/// `union(Rect::ZERO, b) == b`, which is what makes [`Rect::ZERO`] a valid
/// accumulation seed. If both operands are empty the first is returned
/// unchanged.
#[must_use]
pub fn union(a: Rect, b: Rect) -> Rect {
    if is_empty(b) {
        return a;
    }
    if is_empty(a) {
        return b;
    }
    Rect::new(
        a.x0.min(b.x0),
        a.y0.min(b.y0),
        a.x1.max(b.x1),
        a.y1.max(b.y1),
    )
}

/// Returns the geometric intersection of the operands.
///
/// The result may be empty (negative or zero extent); it is not clamped.
#[must_use]
pub fn intersect(a: Rect, b: Rect) -> Rect {
    Rect::new(
        a.x0.max(b.x0),
        a.y0.max(b.y0),
        a.x1.min(b.x1),
        a.y1.min(b.y1),
    )
}
