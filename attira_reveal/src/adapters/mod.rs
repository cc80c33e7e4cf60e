// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters from event libraries to [`RevealControl`](crate::RevealControl).

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
