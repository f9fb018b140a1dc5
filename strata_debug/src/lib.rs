// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing for recorded strata drawing-command streams.
//!
//! [`pretty::CommandPrinter`] writes one human-readable line per
//! [`DrawCmd`](strata_paint::DrawCmd), indented by save depth, so a
//! recorded frame can be eyeballed during development or diffed in a
//! post-mortem.

pub mod pretty;
