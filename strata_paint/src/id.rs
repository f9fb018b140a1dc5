// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque handles for externally-managed paint resources.
//!
//! Images and shaped text blobs are produced by the imaging and text
//! pipelines, which live outside this crate. Drawing commands carry these
//! handles through to the canvas without interpreting them.

use core::fmt;

/// An opaque reference to a decoded image or texture.
///
/// Backends assign image IDs; the painting model passes them through
/// uninterpreted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(pub u32);

impl fmt::Debug for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageId({})", self.0)
    }
}

/// An opaque reference to a shaped run of text.
///
/// Text shaping and layout happen upstream; a blob is the finished,
/// positioned result that a canvas can draw directly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextBlobId(pub u32);

impl fmt::Debug for TextBlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextBlobId({})", self.0)
    }
}
