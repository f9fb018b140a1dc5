// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compositor layer tree for the strata painting model.
//!
//! `strata_flow` is the part of the compositor that turns a tree of paint
//! layers into canvas operations. A frame is two synchronous, depth-first
//! tree walks:
//!
//! ```text
//!   build tree ──► preroll(context, matrix)  (bounds, bottom-up)
//!                       │
//!                       ▼
//!                  paint(context)            (commands, top-down)
//! ```
//!
//! **Preroll** threads the accumulated ancestor transform top-down and
//! merges paint bounds bottom-up: after the pass, every layer's
//! [`paint_bounds`](layer::Layer::paint_bounds) is the tightest rectangle
//! covering everything its subtree will draw.
//!
//! **Paint** emits canvas operations top-down. A layer that pushes canvas
//! state (clip, transform, save-layer) establishes it before any descendant
//! paints and tears it down only after all descendants have painted —
//! strict LIFO save/restore nesting mirroring tree nesting, held even when
//! a descendant's paint panics (see
//! [`AutoRestore`](strata_paint::AutoRestore)).
//!
//! Trees are rebuilt wholesale when the scene changes; `paint_bounds` is
//! recomputed every preroll and stale values from a previous frame must
//! never be read before the current frame's preroll has run.
//!
//! # Example
//!
//! ```
//! use kurbo::Rect;
//! use strata_flow::context::{PaintContext, PrerollContext};
//! use strata_flow::layer::{ClipRectLayer, Layer, PictureLayer};
//! use strata_paint::{Matrix3, RecordingCanvas};
//!
//! let mut root = ClipRectLayer::new();
//! root.set_clip_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
//! root.add(Box::new(PictureLayer::new()));
//!
//! let mut preroll = PrerollContext::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! root.preroll(&mut preroll, Matrix3::IDENTITY);
//!
//! let mut canvas = RecordingCanvas::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut paint = PaintContext { canvas: &mut canvas };
//! root.paint(&mut paint);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod context;
pub mod layer;
