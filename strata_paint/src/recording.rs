// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas-call capture into [`Picture`]s.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, RoundedRect};

use crate::canvas::Canvas;
use crate::cmd::DrawCmd;
use crate::id::{ImageId, TextBlobId};
use crate::matrix::Matrix3;
use crate::paint::Paint;
use crate::picture::Picture;

/// A [`Canvas`] that records every call as a [`DrawCmd`].
///
/// Recording is opened with a cull rect — the bounds the recorded content
/// promises to stay inside — and closed with [`finish`](Self::finish),
/// which yields the [`Picture`]. The recorder tracks save depth and panics
/// on a restore with no matching save or on an unbalanced stream at
/// `finish`; both are producer programming errors.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    cmds: Vec<DrawCmd>,
    cull_rect: Rect,
    save_depth: usize,
}

impl RecordingCanvas {
    /// Opens a recording with the given cull rect.
    #[must_use]
    pub fn new(cull_rect: Rect) -> Self {
        Self {
            cmds: Vec::new(),
            cull_rect,
            save_depth: 0,
        }
    }

    /// Returns the number of unrestored saves.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    /// Returns a view of the commands recorded so far.
    #[must_use]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Closes the recording and returns the picture.
    ///
    /// # Panics
    ///
    /// Panics if any save is still unrestored.
    #[must_use]
    pub fn finish(self) -> Picture {
        assert!(
            self.save_depth == 0,
            "unbalanced recording: {} unrestored save(s)",
            self.save_depth
        );
        Picture::new(self.cmds, self.cull_rect)
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.save_depth += 1;
        self.cmds.push(DrawCmd::Save);
    }

    fn save_layer(&mut self, bounds: Rect, paint: &Paint) {
        self.save_depth += 1;
        self.cmds.push(DrawCmd::SaveLayer {
            bounds,
            paint: *paint,
        });
    }

    fn restore(&mut self) {
        assert!(self.save_depth > 0, "restore without matching save");
        self.save_depth -= 1;
        self.cmds.push(DrawCmd::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cmds.push(DrawCmd::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.cmds.push(DrawCmd::Scale { sx, sy: Some(sy) });
    }

    fn rotate(&mut self, radians: f64, pivot: Point) {
        self.cmds.push(DrawCmd::Rotate { radians, pivot });
    }

    fn skew(&mut self, sx: f64, sy: f64) {
        self.cmds.push(DrawCmd::Skew { sx, sy });
    }

    fn concat(&mut self, matrix: Matrix3) {
        self.cmds.push(DrawCmd::Concat { matrix });
    }

    fn reset_matrix(&mut self) {
        self.cmds.push(DrawCmd::ResetMatrix);
    }

    fn set_matrix(&mut self, matrix: Matrix3) {
        self.cmds.push(DrawCmd::SetMatrix { matrix });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.cmds.push(DrawCmd::ClipRect { rect });
    }

    fn clip_rounded_rect(&mut self, rrect: RoundedRect) {
        self.cmds.push(DrawCmd::ClipRoundedRect { rrect });
    }

    fn clip_path(&mut self, path: &BezPath) {
        self.cmds.push(DrawCmd::ClipPath { path: path.clone() });
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.cmds.push(DrawCmd::DrawPath {
            path: path.clone(),
            paint: *paint,
        });
    }

    fn draw_image(&mut self, image: ImageId, offset: Point, paint: &Paint) {
        self.cmds.push(DrawCmd::DrawImage {
            image,
            offset,
            paint: *paint,
        });
    }

    fn draw_image_rect(&mut self, image: ImageId, src: Rect, dst: Rect, paint: &Paint) {
        self.cmds.push(DrawCmd::DrawImageRect {
            image,
            src,
            dst,
            paint: *paint,
        });
    }

    fn draw_image_nine(&mut self, image: ImageId, src: Rect, center: Rect, dst: Rect, paint: &Paint) {
        self.cmds.push(DrawCmd::DrawImageNine {
            image,
            src,
            center,
            dst,
            paint: *paint,
        });
    }

    fn draw_picture(&mut self, picture: &Picture) {
        self.cmds.push(DrawCmd::DrawPicture {
            picture: Arc::new(picture.clone()),
        });
    }

    fn draw_text_blob(&mut self, blob: TextBlobId, offset: Point, paint: &Paint) {
        self.cmds.push(DrawCmd::DrawTextBlob {
            blob,
            offset,
            paint: *paint,
        });
    }
}
