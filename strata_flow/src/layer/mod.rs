// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer kinds and the [`Layer`] contract.
//!
//! A *layer* is a node in the compositor's paint tree, responsible for
//! bounds computation and command emission for itself and its descendants.
//! The tree is owned top-down: a parent exclusively owns its children
//! (`Vec<Box<dyn Layer>>`), children carry no back-reference, and there are
//! no cycles or cross-links.
//!
//! The concrete kinds:
//!
//! - [`ContainerLayer`] — ordered children, unioned bounds, in-order paint.
//! - [`ClipRectLayer`] — container that clips bounds and painting to a
//!   configured rectangle.
//! - [`TransformLayer`] — container that applies a [`Matrix3`] to its
//!   subtree.
//! - [`OpacityLayer`] — container that composites its subtree through an
//!   offscreen group with an opacity.
//! - [`PictureLayer`] — leaf presenting a recorded
//!   [`Picture`](strata_paint::Picture).

mod clip_rect;
mod container;
mod opacity;
mod picture;
mod transform;

pub use clip_rect::ClipRectLayer;
pub use container::ContainerLayer;
pub use opacity::OpacityLayer;
pub use picture::PictureLayer;
pub use transform::TransformLayer;

use core::fmt;

use kurbo::Rect;

use strata_paint::Matrix3;

use crate::context::{PaintContext, PrerollContext};

/// A node in the compositor's paint tree.
///
/// The two passes are strictly ordered within a frame: `preroll` over the
/// whole tree first, then `paint` over the whole tree. Both are synchronous
/// depth-first walks with no suspension points.
pub trait Layer: fmt::Debug {
    /// Returns the tightest rectangle covering everything this subtree will
    /// draw.
    ///
    /// Only meaningful after the current frame's [`preroll`](Self::preroll)
    /// has run; defaults to [`Rect::ZERO`] on a fresh layer.
    fn paint_bounds(&self) -> Rect;

    /// Computes and stores this subtree's paint bounds.
    ///
    /// `matrix` is the accumulated ancestor transform. Leaf layers compute
    /// bounds from their own content; containers delegate to children and
    /// merge.
    fn preroll(&mut self, context: &mut PrerollContext, matrix: Matrix3);

    /// Emits canvas operations reproducing this subtree's appearance.
    ///
    /// Precondition: `preroll` for the current frame has already run.
    /// Painting on stale bounds is a programmer error, not a recoverable
    /// failure. Must not mutate `paint_bounds` (enforced by `&self`).
    fn paint(&self, context: &mut PaintContext<'_>);
}
