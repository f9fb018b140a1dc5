// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered child aggregation.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;

use strata_paint::{Matrix3, rect};

use super::Layer;
use crate::context::{PaintContext, PrerollContext};

/// A layer holding an ordered sequence of exclusively-owned children.
///
/// Insertion order is both preroll order and paint order (back to front).
/// The exposed mutation is append-only: children are [`add`](Self::add)ed
/// while assembling a frame's tree and the whole tree is discarded and
/// rebuilt when the scene changes.
#[derive(Debug, Default)]
pub struct ContainerLayer {
    children: Vec<Box<dyn Layer>>,
    paint_bounds: Rect,
}

impl ContainerLayer {
    /// Creates a container with no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            paint_bounds: Rect::ZERO,
        }
    }

    /// Appends a child; it paints after (on top of) existing children.
    pub fn add(&mut self, child: Box<dyn Layer>) {
        self.children.push(child);
    }

    /// Returns the number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Prerolls every child in order, unioning each child's resulting
    /// bounds into `bounds`.
    ///
    /// The accumulator is empty-aware: callers seed it with [`Rect::ZERO`]
    /// and the result is the tightest rectangle covering every child's
    /// bounds — or an empty rect if there are no children or all children
    /// are empty.
    pub fn preroll_children(
        &mut self,
        context: &mut PrerollContext,
        matrix: Matrix3,
        bounds: &mut Rect,
    ) {
        for child in &mut self.children {
            child.preroll(context, matrix);
            *bounds = rect::union(*bounds, child.paint_bounds());
        }
    }

    /// Paints every child in insertion order, unconditionally.
    ///
    /// Culling, if any, is a leaf-layer or renderer responsibility; the
    /// container never skips a child.
    pub fn paint_children(&self, context: &mut PaintContext<'_>) {
        for child in &self.children {
            child.paint(context);
        }
    }
}

impl Layer for ContainerLayer {
    fn paint_bounds(&self) -> Rect {
        self.paint_bounds
    }

    fn preroll(&mut self, context: &mut PrerollContext, matrix: Matrix3) {
        let mut child_bounds = Rect::ZERO;
        self.preroll_children(context, matrix, &mut child_bounds);
        // A plain container does not further restrict its children's union.
        self.paint_bounds = child_bounds;
    }

    fn paint(&self, context: &mut PaintContext<'_>) {
        self.paint_children(context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::testing::{FixedBoundsLayer, wide_open};
    use strata_paint::{DrawCmd, ImageId, RecordingCanvas};

    #[test]
    fn empty_container_has_empty_bounds_and_paints_nothing() {
        let mut container = ContainerLayer::new();
        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert!(rect::is_empty(container.paint_bounds()));

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        container.paint(&mut PaintContext {
            canvas: &mut canvas,
        });
        assert!(canvas.cmds().is_empty());
    }

    #[test]
    fn bounds_cover_all_children() {
        let mut container = ContainerLayer::new();
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            1,
        )));
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(50.0, 50.0, 200.0, 80.0),
            2,
        )));
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(-5.0, 20.0, 0.0, 30.0),
            3,
        )));

        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(container.paint_bounds(), Rect::new(-5.0, 0.0, 200.0, 80.0));
    }

    #[test]
    fn empty_children_do_not_contribute() {
        let mut container = ContainerLayer::new();
        container.add(Box::new(FixedBoundsLayer::new(Rect::ZERO, 1)));
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(50.0, 50.0, 200.0, 200.0),
            2,
        )));

        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(
            container.paint_bounds(),
            Rect::new(50.0, 50.0, 200.0, 200.0)
        );
    }

    #[test]
    fn all_children_empty_gives_empty_bounds() {
        let mut container = ContainerLayer::new();
        container.add(Box::new(FixedBoundsLayer::new(Rect::ZERO, 1)));
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(3.0, 3.0, 3.0, 9.0),
            2,
        )));

        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert!(rect::is_empty(container.paint_bounds()));
    }

    #[test]
    fn paints_children_in_insertion_order() {
        let mut container = ContainerLayer::new();
        for id in [4, 2, 9] {
            container.add(Box::new(FixedBoundsLayer::new(
                Rect::new(0.0, 0.0, 1.0, 1.0),
                id,
            )));
        }
        container.preroll(&mut wide_open(), Matrix3::IDENTITY);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        container.paint(&mut PaintContext {
            canvas: &mut canvas,
        });

        let drawn: Vec<u32> = canvas
            .cmds()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::DrawImage {
                    image: ImageId(id), ..
                } => *id,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(drawn, alloc::vec![4, 2, 9]);
    }

    #[test]
    fn preroll_is_idempotent() {
        let mut container = ContainerLayer::new();
        container.add(Box::new(FixedBoundsLayer::new(
            Rect::new(1.0, 2.0, 3.0, 4.0),
            1,
        )));

        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        let first = container.paint_bounds();
        container.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(container.paint_bounds(), first);
    }

    #[test]
    fn children_see_the_ancestor_matrix() {
        let probe = FixedBoundsLayer::new(Rect::new(0.0, 0.0, 1.0, 1.0), 1);
        let log = probe.matrix_log();
        let mut container = ContainerLayer::new();
        container.add(Box::new(probe));

        let ancestor = Matrix3::from_translation(7.0, 11.0);
        container.preroll(&mut wide_open(), ancestor);
        assert_eq!(log.borrow().as_slice(), &[ancestor]);
    }
}
