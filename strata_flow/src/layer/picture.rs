// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picture presentation.

use alloc::sync::Arc;

use kurbo::{Rect, Vec2};

use strata_paint::{AutoRestore, Matrix3, Picture};

use super::Layer;
use crate::context::{PaintContext, PrerollContext};

/// A leaf layer presenting a recorded [`Picture`] at an offset.
///
/// This is the seam between recording and compositing: upstream code
/// records content into a picture once, and the layer replays it each
/// frame. The picture is `Arc`-shared, so the same recording can appear in
/// several trees (or cache generations) without copying.
#[derive(Debug, Default)]
pub struct PictureLayer {
    picture: Option<Arc<Picture>>,
    offset: Vec2,
    paint_bounds: Rect,
}

impl PictureLayer {
    /// Creates a layer with no picture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            picture: None,
            offset: Vec2::ZERO,
            paint_bounds: Rect::ZERO,
        }
    }

    /// Sets the picture to present (`None` paints nothing).
    pub fn set_picture(&mut self, picture: Option<Arc<Picture>>) {
        self.picture = picture;
    }

    /// Sets the offset at which the picture is presented.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Returns the configured offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

impl Layer for PictureLayer {
    fn paint_bounds(&self) -> Rect {
        self.paint_bounds
    }

    fn preroll(&mut self, _context: &mut PrerollContext, _matrix: Matrix3) {
        self.paint_bounds = match &self.picture {
            Some(picture) => {
                let r = picture.cull_rect;
                Rect::new(
                    r.x0 + self.offset.x,
                    r.y0 + self.offset.y,
                    r.x1 + self.offset.x,
                    r.y1 + self.offset.y,
                )
            }
            None => Rect::ZERO,
        };
    }

    fn paint(&self, context: &mut PaintContext<'_>) {
        let Some(picture) = &self.picture else {
            return;
        };
        let mut scope = AutoRestore::save(&mut *context.canvas);
        scope.canvas().translate(self.offset.x, self.offset.y);
        scope.canvas().draw_picture(picture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::testing::wide_open;
    use strata_paint::{Canvas, DrawCmd, ImageId, Paint, RecordingCanvas};

    use kurbo::Point;

    fn sample_picture() -> Arc<Picture> {
        let mut rec = RecordingCanvas::new(Rect::new(0.0, 0.0, 30.0, 40.0));
        rec.draw_image(ImageId(9), Point::ORIGIN, &Paint::default());
        Arc::new(rec.finish())
    }

    #[test]
    fn no_picture_means_empty_bounds_and_silent_paint() {
        let mut layer = PictureLayer::new();
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::ZERO);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        layer.paint(&mut PaintContext {
            canvas: &mut canvas,
        });
        assert!(canvas.cmds().is_empty());
    }

    #[test]
    fn bounds_are_cull_rect_shifted_by_offset() {
        let mut layer = PictureLayer::new();
        layer.set_picture(Some(sample_picture()));
        layer.set_offset(Vec2::new(5.0, 10.0));

        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::new(5.0, 10.0, 35.0, 50.0));
    }

    #[test]
    fn paint_translates_then_draws_inside_a_scope() {
        let mut layer = PictureLayer::new();
        layer.set_picture(Some(sample_picture()));
        layer.set_offset(Vec2::new(5.0, 10.0));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);

        let mut canvas = RecordingCanvas::new(Rect::ZERO);
        layer.paint(&mut PaintContext {
            canvas: &mut canvas,
        });

        assert!(matches!(canvas.cmds()[0], DrawCmd::Save));
        match canvas.cmds()[1] {
            DrawCmd::Translate { dx, dy } => {
                assert_eq!(dx, 5.0);
                assert_eq!(dy, 10.0);
            }
            ref other => panic!("expected Translate, got {other:?}"),
        }
        assert!(matches!(canvas.cmds()[2], DrawCmd::DrawPicture { .. }));
        assert!(matches!(canvas.cmds()[3], DrawCmd::Restore));
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn replacing_the_picture_updates_bounds_next_preroll() {
        let mut layer = PictureLayer::new();
        layer.set_picture(Some(sample_picture()));
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::new(0.0, 0.0, 30.0, 40.0));

        layer.set_picture(None);
        layer.preroll(&mut wide_open(), Matrix3::IDENTITY);
        assert_eq!(layer.paint_bounds(), Rect::ZERO);
    }
}
