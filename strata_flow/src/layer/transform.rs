// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree transforms.

use alloc::boxed::Box;

use kurbo::Rect;

use strata_paint::{AutoRestore, Matrix3};

use super::{ContainerLayer, Layer};
use crate::context::{PaintContext, PrerollContext};

/// A container that applies a [`Matrix3`] to its entire subtree.
///
/// During preroll, children see `ancestor_matrix * transform` as their
/// accumulated matrix, and the layer's own bounds are the children's union
/// mapped through `transform` — bounds stay in the parent's coordinate
/// space. During paint, the transform is concatenated onto the canvas
/// inside a save/restore scope.
#[derive(Debug, Default)]
pub struct TransformLayer {
    children: ContainerLayer,
    transform: Matrix3,
    paint_bounds: Rect,
}

impl TransformLayer {
    /// Creates a transform layer with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: ContainerLayer::new(),
            transform: Matrix3::IDENTITY,
            paint_bounds: Rect::ZERO,
        }
    }

    /// Sets the transform, effective from the next preroll.
    pub fn set_transform(&mut self, transform: Matrix3) {
        self.transform = transform;
    }

    /// Returns the configured transform.
    #[must_use]
    pub fn transform(&self) -> Matrix3 {
        self.transform
    }

    /// Appends a child; it paints after (on top of) existing children.
    pub fn add(&mut self, child: Box<dyn Layer>) {
        self.children.add(child);
    }
}

impl Layer for TransformLayer {
    fn paint_bounds(&self) -> Rect {
        self.paint_bounds
    }

    fn preroll(&mut self, context: &mut PrerollContext, matrix: Matrix3) {
        let child_matrix = matrix * self.transform;
        let mut child_bounds = Rect::ZERO;
        self.children
            .preroll_children(context, child_matrix, &mut child_bounds);
        self.paint_bounds = self.transform.map_rect(child_bounds);
    }

    fn paint(&self, context: &mut PaintContext<'_>) {
        let mut scope = AutoRestore::save(&mut *context.canvas);
        scope.canvas().concat(self.transform);

        let mut inner = PaintContext {
            canvas: scope.canvas(),
        };
        self.children.paint_children(&mut inner);
    }
}
