// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group opacity.

use alloc::boxed::Box;

use kurbo::Rect;

use strata_paint::{AutoRestore, Matrix3, Paint};

use super::{ContainerLayer, Layer};
use crate::context::{PaintContext, PrerollContext};

/// A container that composites its subtree through an offscreen group with
/// a uniform opacity.
///
/// Bounds are the plain children's union. Paint always pushes the
/// save-layer, even at opacity 1.0 — every scope layer contributes exactly
/// one canvas frame.
#[derive(Debug)]
pub struct OpacityLayer {
    children: ContainerLayer,
    opacity: f32,
}

impl Default for OpacityLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl OpacityLayer {
    /// Creates a fully opaque layer with no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: ContainerLayer::new(),
            opacity: 1.0,
        }
    }

    /// Sets the group opacity (0.0 = transparent, 1.0 = opaque).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Returns the group opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Appends a child; it paints after (on top of) existing children.
    pub fn add(&mut self, child: Box<dyn Layer>) {
        self.children.add(child);
    }
}

impl Layer for OpacityLayer {
    fn paint_bounds(&self) -> Rect {
        self.children.paint_bounds()
    }

    fn preroll(&mut self, context: &mut PrerollContext, matrix: Matrix3) {
        self.children.preroll(context, matrix);
    }

    fn paint(&self, context: &mut PaintContext<'_>) {
        let mut scope = AutoRestore::save_layer(
            &mut *context.canvas,
            self.children.paint_bounds(),
            &Paint::with_opacity(self.opacity),
        );

        let mut inner = PaintContext {
            canvas: scope.canvas(),
        };
        self.children.paint_children(&mut inner);
    }
}
