// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable command-stream output.
//!
//! [`CommandPrinter`] writes one line per command to a
//! [`Write`](std::io::Write) destination (default: stderr). Nesting from
//! `Save`/`SaveLayer`/`Restore` is shown as two-space indentation, which
//! makes unbalanced streams visually obvious.

use std::io::Write;

use kurbo::Rect;

use strata_paint::{DrawCmd, Picture};

/// Writes human-readable command lines to a [`Write`](std::io::Write)
/// destination.
pub struct CommandPrinter<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for CommandPrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandPrinter").finish_non_exhaustive()
    }
}

impl CommandPrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a printer that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> CommandPrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Prints a whole picture: a cull-rect header, then the commands.
    pub fn print_picture(&mut self, picture: &Picture) {
        let _ = writeln!(
            self.writer,
            "picture cull={} cmds={}",
            rect_str(picture.cull_rect),
            picture.len(),
        );
        self.print(&picture.cmds);
    }

    /// Prints one line per command, indented by save depth.
    pub fn print(&mut self, cmds: &[DrawCmd]) {
        let mut depth = 0_usize;
        for cmd in cmds {
            if matches!(cmd, DrawCmd::Restore) {
                depth = depth.saturating_sub(1);
            }
            let _ = write!(self.writer, "{:indent$}", "", indent = depth * 2);
            self.print_one(cmd);
            if matches!(cmd, DrawCmd::Save | DrawCmd::SaveLayer { .. }) {
                depth += 1;
            }
        }
    }

    fn print_one(&mut self, cmd: &DrawCmd) {
        let _ = match cmd {
            DrawCmd::Save => writeln!(self.writer, "save"),
            DrawCmd::SaveLayer { bounds, paint } => writeln!(
                self.writer,
                "save-layer bounds={} opacity={}",
                rect_str(*bounds),
                paint.opacity,
            ),
            DrawCmd::Restore => writeln!(self.writer, "restore"),
            DrawCmd::Translate { dx, dy } => {
                writeln!(self.writer, "translate {dx},{dy}")
            }
            DrawCmd::Scale { sx, sy } => match sy {
                Some(sy) => writeln!(self.writer, "scale {sx},{sy}"),
                None => writeln!(self.writer, "scale {sx}"),
            },
            DrawCmd::Rotate { radians, pivot } => writeln!(
                self.writer,
                "rotate {radians}rad about {},{}",
                pivot.x, pivot.y,
            ),
            DrawCmd::Skew { sx, sy } => writeln!(self.writer, "skew {sx},{sy}"),
            DrawCmd::Concat { .. } => writeln!(self.writer, "concat"),
            DrawCmd::ResetMatrix => writeln!(self.writer, "reset-matrix"),
            DrawCmd::SetMatrix { .. } => writeln!(self.writer, "set-matrix"),
            DrawCmd::ClipRect { rect } => {
                writeln!(self.writer, "clip-rect {}", rect_str(*rect))
            }
            DrawCmd::ClipRoundedRect { rrect } => writeln!(
                self.writer,
                "clip-rrect {}",
                rect_str(rrect.rect()),
            ),
            DrawCmd::ClipPath { path } => {
                writeln!(self.writer, "clip-path segments={}", path.elements().len())
            }
            DrawCmd::DrawPath { path, .. } => {
                writeln!(self.writer, "draw-path segments={}", path.elements().len())
            }
            DrawCmd::DrawImage { image, offset, .. } => writeln!(
                self.writer,
                "draw-image {:?} at {},{}",
                image, offset.x, offset.y,
            ),
            DrawCmd::DrawImageRect { image, dst, .. } => writeln!(
                self.writer,
                "draw-image-rect {:?} dst={}",
                image,
                rect_str(*dst),
            ),
            DrawCmd::DrawImageNine { image, dst, .. } => writeln!(
                self.writer,
                "draw-image-nine {:?} dst={}",
                image,
                rect_str(*dst),
            ),
            DrawCmd::DrawPicture { picture } => writeln!(
                self.writer,
                "draw-picture cull={} cmds={}",
                rect_str(picture.cull_rect),
                picture.len(),
            ),
            DrawCmd::DrawTextBlob { blob, offset, .. } => writeln!(
                self.writer,
                "draw-text {:?} at {},{}",
                blob, offset.x, offset.y,
            ),
        };
    }
}

fn rect_str(r: Rect) -> String {
    format!("({},{})+({}x{})", r.x0, r.y0, r.width(), r.height())
}
