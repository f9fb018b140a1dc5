// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-independent painting model for the strata compositor.
//!
//! `strata_paint` defines the intermediate representation between "what to
//! draw" and "how to draw it". It is `no_std` compatible (with `alloc`) and
//! has no rendering backend of its own; a backend supplies a [`Canvas`]
//! implementation and this crate supplies everything that flows into it:
//!
//! **[`cmd`]** — [`DrawCmd`], a closed set of immutable drawing operations
//! (save/restore, clips, transforms, draw primitives) forming a recorded
//! command stream.
//!
//! **[`picture`]** — [`Picture`], an immutable recorded command sequence
//! with a cull rect, shareable and replayable onto any canvas. Pictures can
//! nest via [`DrawCmd::DrawPicture`], enabling hierarchical recording and
//! caching.
//!
//! **[`canvas`]** — the [`Canvas`] trait consumed by the paint pass, plus
//! [`AutoRestore`], a scope guard that keeps save/restore balanced on every
//! exit path including panics.
//!
//! **[`recording`]** — [`RecordingCanvas`], a `Canvas` that captures calls
//! as commands and produces a [`Picture`].
//!
//! **[`matrix`]** — [`Matrix3`], a 3×3 2-D transform in the style of a
//! column-major GPU matrix.
//!
//! **[`rect`]** — the rectangle arithmetic the compositor's bounds
//! propagation relies on (empty-aware union, intersection).
//!
//! **[`id`]** / **[`paint`]** — opaque resource handles and the [`Paint`]
//! description attached to draw primitives.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod canvas;
pub mod cmd;
pub mod id;
pub mod matrix;
pub mod paint;
pub mod picture;
pub mod recording;
pub mod rect;

pub use canvas::{AutoRestore, Canvas};
pub use cmd::DrawCmd;
pub use id::{ImageId, TextBlobId};
pub use matrix::Matrix3;
pub use paint::{BlendMode, Color, Paint};
pub use picture::Picture;
pub use recording::RecordingCanvas;
