//! Pure layout and compliance logic for VastuLeap.
//!
//! This crate contains all plan-generation logic that is independent of any
//! UI framework, canvas, or session store. Functions take plain data and
//! return results, making them unit-testable and portable across the web
//! front-end, native CLI tools, and any future renderer.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`classify`] | Compliant / defect / neutral classification of placements |
//! | [`layout`] | Anchor tables, plan request, candidate layout generation |
//! | [`report`] | Human-readable compliance lines and render color map |
//! | [`rooms`] | The fixed set of placeable rooms |
//! | [`rules`] | Vastu rule table: prescribed zones, minimum dimensions |
//! | [`zones`] | Compass-octant zone codes and special markers |

pub mod classify;
pub mod layout;
pub mod report;
pub mod rooms;
pub mod rules;
pub mod zones;
