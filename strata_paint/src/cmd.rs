// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-command model.
//!
//! [`DrawCmd`] is a *closed* set of immutable drawing operations — the
//! intermediate representation between "what to draw" and "how to draw it".
//! A rendered frame is an ordered sequence of commands with no shared
//! mutable state between them; a consumer executes them strictly in
//! sequence via [`DrawCmd::replay`].
//!
//! # Producer contract
//!
//! `Save`/`SaveLayer` each push one canvas state frame and `Restore` pops
//! exactly one, so a well-formed stream balances them. An unbalanced stream
//! is a programming error in the producer (the layer system); `DrawCmd` is
//! pure data and performs no validation of its own.

use alloc::sync::Arc;

use kurbo::{BezPath, Point, Rect, RoundedRect};

use crate::canvas::Canvas;
use crate::id::{ImageId, TextBlobId};
use crate::matrix::Matrix3;
use crate::paint::Paint;
use crate::picture::Picture;

/// One immutable unit of a recorded drawing instruction stream.
#[derive(Clone, Debug)]
pub enum DrawCmd {
    /// Pushes a canvas state frame (transform + clip).
    Save,
    /// Pushes a state frame and an offscreen group composited with `paint`
    /// on the matching restore.
    SaveLayer {
        /// Bounds hint for the offscreen group.
        bounds: Rect,
        /// Paint applied when the group is composited.
        paint: Paint,
    },
    /// Pops the most recent unrestored `Save` or `SaveLayer`.
    Restore,
    /// Translates the current transform.
    Translate {
        /// Horizontal offset.
        dx: f64,
        /// Vertical offset.
        dy: f64,
    },
    /// Scales the current transform. A missing `sy` means uniform scale by
    /// `sx`.
    Scale {
        /// Horizontal scale factor.
        sx: f64,
        /// Vertical scale factor; defaults to `sx` when `None`.
        sy: Option<f64>,
    },
    /// Rotates the current transform about `pivot`.
    Rotate {
        /// Rotation angle in radians.
        radians: f64,
        /// Pivot point ([`Point::ORIGIN`] for an origin rotation).
        pivot: Point,
    },
    /// Skews the current transform.
    Skew {
        /// Horizontal skew factor.
        sx: f64,
        /// Vertical skew factor.
        sy: f64,
    },
    /// Post-multiplies `matrix` onto the current transform.
    Concat {
        /// The transform to append.
        matrix: Matrix3,
    },
    /// Resets the current transform to identity.
    ResetMatrix,
    /// Replaces the current transform absolutely.
    SetMatrix {
        /// The new transform.
        matrix: Matrix3,
    },
    /// Intersects the current clip with a rectangle.
    ClipRect {
        /// Clip rectangle.
        rect: Rect,
    },
    /// Intersects the current clip with a rounded rectangle.
    ClipRoundedRect {
        /// Clip rounded rectangle.
        rrect: RoundedRect,
    },
    /// Intersects the current clip with a path.
    ClipPath {
        /// Clip path.
        path: BezPath,
    },
    /// Draws a path.
    DrawPath {
        /// Path geometry.
        path: BezPath,
        /// Paint state.
        paint: Paint,
    },
    /// Draws an image with its top-left corner at `offset`.
    DrawImage {
        /// Image handle.
        image: ImageId,
        /// Destination position.
        offset: Point,
        /// Paint state.
        paint: Paint,
    },
    /// Draws the `src` portion of an image scaled into `dst`.
    DrawImageRect {
        /// Image handle.
        image: ImageId,
        /// Source rectangle in image space.
        src: Rect,
        /// Destination rectangle.
        dst: Rect,
        /// Paint state.
        paint: Paint,
    },
    /// Draws an image with nine-patch stretching: `center` divides `src`
    /// into a 3×3 grid whose corners stay unscaled.
    DrawImageNine {
        /// Image handle.
        image: ImageId,
        /// Source rectangle in image space.
        src: Rect,
        /// Stretchable center region within `src`.
        center: Rect,
        /// Destination rectangle.
        dst: Rect,
        /// Paint state.
        paint: Paint,
    },
    /// Replays a nested recorded command sequence.
    DrawPicture {
        /// The nested picture.
        picture: Arc<Picture>,
    },
    /// Draws a shaped text blob with its origin at `offset`.
    DrawTextBlob {
        /// Text blob handle.
        blob: TextBlobId,
        /// Baseline origin.
        offset: Point,
        /// Paint state.
        paint: Paint,
    },
}

impl DrawCmd {
    /// Executes this command against `canvas`.
    ///
    /// `Scale` resolves its uniform-scale default here, so canvas
    /// implementations always see both factors.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Save => canvas.save(),
            Self::SaveLayer { bounds, paint } => canvas.save_layer(*bounds, paint),
            Self::Restore => canvas.restore(),
            Self::Translate { dx, dy } => canvas.translate(*dx, *dy),
            Self::Scale { sx, sy } => canvas.scale(*sx, sy.unwrap_or(*sx)),
            Self::Rotate { radians, pivot } => canvas.rotate(*radians, *pivot),
            Self::Skew { sx, sy } => canvas.skew(*sx, *sy),
            Self::Concat { matrix } => canvas.concat(*matrix),
            Self::ResetMatrix => canvas.reset_matrix(),
            Self::SetMatrix { matrix } => canvas.set_matrix(*matrix),
            Self::ClipRect { rect } => canvas.clip_rect(*rect),
            Self::ClipRoundedRect { rrect } => canvas.clip_rounded_rect(*rrect),
            Self::ClipPath { path } => canvas.clip_path(path),
            Self::DrawPath { path, paint } => canvas.draw_path(path, paint),
            Self::DrawImage {
                image,
                offset,
                paint,
            } => canvas.draw_image(*image, *offset, paint),
            Self::DrawImageRect {
                image,
                src,
                dst,
                paint,
            } => canvas.draw_image_rect(*image, *src, *dst, paint),
            Self::DrawImageNine {
                image,
                src,
                center,
                dst,
                paint,
            } => canvas.draw_image_nine(*image, *src, *center, *dst, paint),
            Self::DrawPicture { picture } => canvas.draw_picture(picture),
            Self::DrawTextBlob {
                blob,
                offset,
                paint,
            } => canvas.draw_text_blob(*blob, *offset, paint),
        }
    }

    /// Executes a command sequence strictly in order.
    pub fn replay_all(cmds: &[Self], canvas: &mut dyn Canvas) {
        for cmd in cmds {
            cmd.replay(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::recording::RecordingCanvas;

    #[test]
    fn scale_defaults_to_uniform() {
        let mut rec = RecordingCanvas::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        DrawCmd::Scale { sx: 2.0, sy: None }.replay(&mut rec);
        let picture = rec.finish();
        match &picture.cmds[0] {
            DrawCmd::Scale { sx, sy } => {
                assert_eq!(*sx, 2.0);
                assert_eq!(*sy, Some(2.0));
            }
            other => panic!("expected Scale, got {other:?}"),
        }
    }

    #[test]
    fn replay_all_preserves_order() {
        let cmds = vec![
            DrawCmd::Save,
            DrawCmd::Translate { dx: 1.0, dy: 2.0 },
            DrawCmd::Restore,
        ];
        let mut rec = RecordingCanvas::new(Rect::ZERO);
        DrawCmd::replay_all(&cmds, &mut rec);
        let picture = rec.finish();
        assert!(matches!(picture.cmds[0], DrawCmd::Save));
        assert!(matches!(picture.cmds[1], DrawCmd::Translate { .. }));
        assert!(matches!(picture.cmds[2], DrawCmd::Restore));
    }
}
