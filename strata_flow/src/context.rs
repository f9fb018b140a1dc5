// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pass context objects threaded through the layer tree.
//!
//! A context is scoped to one pass over one tree and is handed through to
//! children unchanged; layers read from it but do not replace it.

use core::fmt;

use kurbo::Rect;

use strata_paint::Canvas;

/// Ambient state for one preroll pass.
#[derive(Clone, Copy, Debug)]
pub struct PrerollContext {
    /// The device-space rectangle the frame will actually display.
    ///
    /// Carried for leaf layers and raster caches that want to skip work
    /// outside the visible region; the tree walk itself does not cull.
    pub cull_rect: Rect,
}

impl PrerollContext {
    /// Creates a preroll context for the given cull rect.
    #[must_use]
    pub fn new(cull_rect: Rect) -> Self {
        Self { cull_rect }
    }
}

/// Ambient state for one paint pass.
///
/// Holds the target canvas for the duration of the pass. The canvas is the
/// one mutable shared resource in the system; routing every access through
/// the context keeps it single-writer by construction.
pub struct PaintContext<'a> {
    /// The canvas all layers in this pass draw into.
    pub canvas: &'a mut dyn Canvas,
}

impl fmt::Debug for PaintContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintContext").finish_non_exhaustive()
    }
}
