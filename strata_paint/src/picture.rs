// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded command sequences.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::canvas::Canvas;
use crate::cmd::DrawCmd;

/// An immutable recorded drawing-command sequence.
///
/// Produced by [`RecordingCanvas::finish`](crate::RecordingCanvas::finish)
/// and replayed onto any [`Canvas`]. Pictures nest via
/// [`DrawCmd::DrawPicture`], which is how hierarchical recording and
/// caching are expressed.
#[derive(Clone, Debug, Default)]
pub struct Picture {
    /// Commands in execution order.
    pub cmds: Vec<DrawCmd>,
    /// The bounds the recording was opened with — the tightest rectangle
    /// the recorded content is promised to stay inside.
    pub cull_rect: Rect,
}

impl Picture {
    /// Creates a picture from a finished command list and its cull rect.
    #[must_use]
    pub fn new(cmds: Vec<DrawCmd>, cull_rect: Rect) -> Self {
        Self { cmds, cull_rect }
    }

    /// Returns the number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    /// Returns `true` if no commands were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Replays every command, in order, against `canvas`.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        DrawCmd::replay_all(&self.cmds, canvas);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::recording::RecordingCanvas;

    #[test]
    fn empty_picture() {
        let p = Picture::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.cull_rect, Rect::ZERO);
    }

    #[test]
    fn replay_copies_stream() {
        let p = Picture::new(
            vec![DrawCmd::Save, DrawCmd::Restore],
            Rect::new(0.0, 0.0, 5.0, 5.0),
        );
        let mut rec = RecordingCanvas::new(p.cull_rect);
        p.replay(&mut rec);
        let replayed = rec.finish();
        assert_eq!(replayed.len(), 2);
        assert!(matches!(replayed.cmds[0], DrawCmd::Save));
        assert!(matches!(replayed.cmds[1], DrawCmd::Restore));
    }
}
