// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas contract consumed by the paint pass.
//!
//! A [`Canvas`] is the one mutable shared resource in the system. It is
//! mutated under a strict stack protocol: every [`save`](Canvas::save) or
//! [`save_layer`](Canvas::save_layer) pushes one state frame (transform +
//! clip), every [`restore`](Canvas::restore) pops exactly one, and nesting
//! mirrors layer-tree nesting (LIFO).
//!
//! [`AutoRestore`] wraps a push in a scope guard so the matching pop runs
//! on every exit path, including panic unwinding — an unhandled error
//! during a paint pass must not leave the canvas in a pushed, unrestored
//! state.

use kurbo::{BezPath, Point, Rect, RoundedRect};

use crate::id::{ImageId, TextBlobId};
use crate::matrix::Matrix3;
use crate::paint::Paint;
use crate::picture::Picture;

/// A stateful drawing surface.
///
/// Backends implement this against a real rendering surface;
/// [`RecordingCanvas`](crate::RecordingCanvas) implements it by capturing
/// the call stream. Clip methods intersect the current clip with their
/// argument, scoped to the enclosing save/restore pair.
pub trait Canvas {
    /// Pushes a state frame (transform + clip).
    fn save(&mut self);

    /// Pushes a state frame and an offscreen group; the matching
    /// [`restore`](Self::restore) composites the group with `paint`.
    fn save_layer(&mut self, bounds: Rect, paint: &Paint);

    /// Pops the most recent unrestored save.
    fn restore(&mut self);

    /// Translates the current transform.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Scales the current transform.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Rotates the current transform about `pivot`.
    fn rotate(&mut self, radians: f64, pivot: Point);

    /// Skews the current transform.
    fn skew(&mut self, sx: f64, sy: f64);

    /// Post-multiplies `matrix` onto the current transform.
    fn concat(&mut self, matrix: Matrix3);

    /// Resets the current transform to identity.
    fn reset_matrix(&mut self);

    /// Replaces the current transform absolutely.
    fn set_matrix(&mut self, matrix: Matrix3);

    /// Intersects the current clip with a rectangle.
    fn clip_rect(&mut self, rect: Rect);

    /// Intersects the current clip with a rounded rectangle.
    fn clip_rounded_rect(&mut self, rrect: RoundedRect);

    /// Intersects the current clip with a path.
    fn clip_path(&mut self, path: &BezPath);

    /// Draws a path.
    fn draw_path(&mut self, path: &BezPath, paint: &Paint);

    /// Draws an image with its top-left corner at `offset`.
    fn draw_image(&mut self, image: ImageId, offset: Point, paint: &Paint);

    /// Draws the `src` portion of an image scaled into `dst`.
    fn draw_image_rect(&mut self, image: ImageId, src: Rect, dst: Rect, paint: &Paint);

    /// Draws an image with nine-patch stretching.
    fn draw_image_nine(&mut self, image: ImageId, src: Rect, center: Rect, dst: Rect, paint: &Paint);

    /// Replays a nested recorded command sequence.
    fn draw_picture(&mut self, picture: &Picture);

    /// Draws a shaped text blob with its origin at `offset`.
    fn draw_text_blob(&mut self, blob: TextBlobId, offset: Point, paint: &Paint);
}

/// A scope guard pairing one canvas push with a guaranteed pop.
///
/// Construction calls [`Canvas::save`] (or [`Canvas::save_layer`]); drop
/// calls [`Canvas::restore`]. Because the pop lives in `Drop`, it runs on
/// early returns and as a panic unwinds, which is what keeps ancestor
/// state frames balanced when a descendant's paint fails mid-frame.
pub struct AutoRestore<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<C: Canvas + ?Sized> core::fmt::Debug for AutoRestore<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AutoRestore").finish_non_exhaustive()
    }
}

impl<'a, C: Canvas + ?Sized> AutoRestore<'a, C> {
    /// Pushes a plain state frame and returns the guard for it.
    pub fn save(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }

    /// Pushes an offscreen group and returns the guard for it.
    pub fn save_layer(canvas: &'a mut C, bounds: Rect, paint: &Paint) -> Self {
        canvas.save_layer(bounds, paint);
        Self { canvas }
    }

    /// Returns the guarded canvas for drawing within the scope.
    pub fn canvas(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for AutoRestore<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
