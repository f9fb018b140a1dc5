// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint state attached to draw primitives.

use core::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Creates an opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from RGBA channels.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Blend mode for compositing a draw primitive or save-layer group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard source-over alpha compositing.
    #[default]
    SourceOver,
    /// Multiply blend.
    Multiply,
    /// Screen blend.
    Screen,
}

/// Immutable paint description for a draw primitive.
///
/// A `Paint` is a value: commands copy it at record time and never observe
/// later mutation. The `opacity` multiplier is applied on top of the color's
/// own alpha (group opacity for save-layers uses the same field).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Base color.
    pub color: Color,
    /// Blend mode.
    pub blend_mode: BlendMode,
    /// Opacity multiplier (0.0–1.0) on top of `color.a`.
    pub opacity: f32,
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
}

impl Paint {
    /// Creates a paint with the given color and default everything else.
    #[inline]
    #[must_use]
    pub const fn with_color(color: Color) -> Self {
        Self {
            color,
            blend_mode: BlendMode::SourceOver,
            opacity: 1.0,
            anti_alias: true,
        }
    }

    /// Creates a paint carrying only a group opacity, for save-layers.
    #[inline]
    #[must_use]
    pub const fn with_opacity(opacity: f32) -> Self {
        Self {
            color: Color::WHITE,
            blend_mode: BlendMode::SourceOver,
            opacity,
            anti_alias: true,
        }
    }
}

impl Default for Paint {
    #[inline]
    fn default() -> Self {
        Self::with_color(Color::BLACK)
    }
}
