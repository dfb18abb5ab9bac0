//! Chat composition core for a conference-client chat panel.
//!
//! Two cooperating pieces, both pure in-memory text processing:
//!
//! - the recipient-targeting state machine ([`mention`], [`composer`]):
//!   `@mention` trigger detection, candidate narrowing over the roster,
//!   exact-match recipient binding, and tag stripping at submit time;
//! - the message content classifier ([`classify`]): splitting a sent
//!   message into ordered emoji / link / formatted-text segments.
//!
//! View rendering, roster storage, markdown parsing, and transport all stay
//! on the host side, reached through [`host::HostAction`].

pub mod classify;
pub mod composer;
pub mod emoji;
pub mod host;
pub mod mention;
pub mod roster;
