// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular clipping.

use alloc::boxed::Box;

use kurbo::Rect;

use strata_paint::{AutoRestore, Matrix3, rect};

use super::{ContainerLayer, Layer};
use crate::context::{PaintContext, PrerollContext};

/// A container that clips its children's painting and combined bounds to a
/// configured rectangle.
///
/// `clip_rect` is plain mutable configuration: callers may reconfigure it
/// between frames, and doing so only affects the next preroll/paint cycle.
/// It is not validated.
///
/// # Bounds retention
///
/// Preroll intersects the children's combined bounds with `clip_rect` and
/// stores the result **only when it is non-empty**. When the intersection
/// is empty — the clip fully occludes its children, or the clip itself is
/// empty — `paint_bounds` retains its previous value (the zero-rect
/// default, or the bounds from an earlier preroll). Downstream consumers
/// rely on this retention; do not "fix" it to reset the bounds.
#[derive(Debug, Default)]
pub struct ClipRectLayer {
    children: ContainerLayer,
    clip_rect: Rect,
    paint_bounds: Rect,
}

impl ClipRectLayer {
    /// Creates a clip layer with an empty clip and no children.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: ContainerLayer::new(),
            clip_rect: Rect::ZERO,
            paint_bounds: Rect::ZERO,
        }
    }

    /// Sets the clip rectangle, effective from the next preroll.
    pub fn set_clip_rect(&mut self, clip_rect: Rect) {
        self.clip_rect = clip_rect;
    }

    /// Returns the configured clip rectangle.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        self.clip_rect
    }

    /// Appends a child; it paints after (on top of) existing children.
    pub fn add(&mut self, child: Box<dyn Layer>) {
        self.children.add(child);
    }
}

impl Layer for ClipRectLayer {
    fn paint_bounds(&self) -> Rect {
        self.paint_bounds
    }

    fn preroll(&mut self, context: &mut PrerollContext, matrix: Matrix3) {
        let mut child_bounds = Rect::ZERO;
        self.children.preroll_children(context, matrix, &mut child_bounds);
        let child_bounds = rect::intersect(child_bounds, self.clip_rect);

        if !rect::is_empty(child_bounds) {
            self.paint_bounds = child_bounds;
        }
    }

    fn paint(&self, context: &mut PaintContext<'_>) {
        // The clip applied at paint time is the already-intersected bounds,
        // tighter than the configured rect whenever the children's union is
        // smaller.
        let mut scope = AutoRestore::save(&mut *context.canvas);
        scope.canvas().clip_rect(self.paint_bounds);

        let mut inner = PaintContext {
            canvas: scope.canvas(),
        };
        self.children.paint_children(&mut inner);
        // `scope` drops here, restoring the canvas even if a child's paint
        // unwound past us.
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::layer::testing::{FixedBoundsLayer, PanickingLayer, wide_open};
    use strata_paint::{DrawCmd, RecordingCanvas};

    fn count_pushes_and_pops(cmds: &[DrawCmd]) -> (usize, usize) {
        let pushes = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Save | DrawCmd::SaveLayer { .. }))
            .count();
        let pops = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Restore))
            .count();
        (pushes, pops)
    }

    #[test]
    fn bounds_are_child_union_intersected_with_clip() {
        // Scenario A: clip (0,0,100,100), child bounds (50,50,200,200).
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(50.0, 50.0, 200.0, 200.0),
            1,
        )));

        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::new(50.0, 50.0, 100.0, 100.0));
    }

    #[test]
    fn empty_intersection_keeps_previous_bounds() {
        // Scenario B: after a frame with non-empty bounds, an empty clip
        // leaves the stale bounds in place.
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(50.0, 50.0, 200.0, 200.0),
            1,
        )));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        let prior = layer.paint_bounds();
        assert_eq!(prior, Rect::new(50.0, 50.0, 100.0, 100.0));

        layer.set_clip_rect(Rect::ZERO);
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), prior);
    }

    #[test]
    fn fresh_layer_with_empty_intersection_stays_at_zero() {
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(20.0, 20.0, 30.0, 30.0),
            1,
        )));

        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::ZERO);
    }

    #[test]
    fn disjoint_children_clip_to_covering_intersection() {
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 60.0, 60.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(10.0, 10.0, 20.0, 20.0),
            1,
        )));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(40.0, 40.0, 80.0, 80.0),
            2,
        )));

        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        // Union (10,10,80,80) clipped to (0,0,60,60).
        assert_eq!(layer.paint_bounds(), Rect::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn paint_clips_to_intersected_bounds_not_configured_rect() {
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(50.0, 50.0, 200.0, 200.0),
            1,
        )));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        layer.paint(&mut PaintContext {
            canvas: &mut canvas,
        });

        assert!(matches!(canvas.cmds()[0], DrawCmd::Save));
        match canvas.cmds()[1] {
            DrawCmd::ClipRect { rect } => {
                assert_eq!(rect, Rect::new(50.0, 50.0, 100.0, 100.0));
            }
            ref other => panic!("expected ClipRect, got {other:?}"),
        }
        assert!(matches!(canvas.cmds()[2], DrawCmd::DrawImage { .. }));
        assert!(matches!(canvas.cmds()[3], DrawCmd::Restore));
    }

    #[test]
    fn paint_balances_save_and_restore() {
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            1,
        )));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        layer.paint(&mut PaintContext {
            canvas: &mut canvas,
        });

        let (pushes, pops) = count_pushes_and_pops(canvas.cmds());
        assert_eq!(pushes, 1);
        assert_eq!(pops, 1);
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn restore_runs_when_a_child_panics_mid_paint() {
        // Scenario D: a deep failure must not leave ancestors' canvas
        // state pushed.
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(0.0, 0.0, 50.0, 50.0),
            1,
        )));
        layer.add(Box::new(PanickingLayer::new(Rect::new(
            0.0, 0.0, 50.0, 50.0,
        ))));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        let result = catch_unwind(AssertUnwindSafe(|| {
            layer.paint(&mut PaintContext {
                canvas: &mut canvas,
            });
        }));
        assert!(result.is_err(), "the child's panic must propagate");

        let (pushes, pops) = count_pushes_and_pops(canvas.cmds());
        assert_eq!(pushes, pops, "canvas state must be balanced after unwind");
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn reconfiguring_clip_takes_effect_next_preroll() {
        let mut layer = ClipRectLayer::new();
        layer.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        layer.add(Box::new(FixedBoundsLayer::new(
            Rect::new(0.0, 0.0, 80.0, 80.0),
            1,
        )));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::new(0.0, 0.0, 80.0, 80.0));

        layer.set_clip_rect(Rect::new(0.0, 0.0, 40.0, 40.0));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::new(0.0, 0.0, 40.0, 40.0));
    }
}
