//! Responsive navigation layout for the FPI desktop shell.
//!
//! The crate is toolkit agnostic. [`ResponsiveLayout`] owns the navigation
//! state and a [`Host`] that supplies viewport size, path access and render
//! requests. After every transition the application asks for a fresh
//! [`RenderTree`] and draws it with its widget toolkit:
//! - [`Orientation::classify`] turns the viewport into landscape or portrait;
//! - [`PanelDecision::derive`] picks a full rail, an icon strip or an
//!   overlay;
//! - [`ContentSwitcher`] keeps exactly one page visible;
//! - routes bind the selected page to the host path when enabled.
//!
//! # Quick Example
//!
//! ```
//! use fpi_ui_layout::{
//!     Destination, Host, LayoutConfig, ResponsiveLayout, Slot, Viewport,
//! };
//!
//! struct Window {
//!     size: Viewport,
//!     path: String,
//! }
//!
//! impl Host for Window {
//!     fn viewport(&self) -> Viewport {
//!         self.size
//!     }
//!
//!     fn request_render(&mut self) {}
//!
//!     fn route(&self) -> &str {
//!         &self.path
//!     }
//!
//!     fn set_route(&mut self, path: &str) {
//!         self.path = path.to_string();
//!     }
//! }
//!
//! let host = Window {
//!     size: Viewport::new(400.0, 800.0),
//!     path: String::from("/"),
//! };
//! let pages = vec![
//!     (Destination::new("○", "●", "Input"), "input page"),
//!     (Destination::new("□", "■", "Output"), "output page"),
//! ];
//! let mut layout =
//!     ResponsiveLayout::new(pages, LayoutConfig::default(), host).unwrap();
//!
//! layout.toggle_navigation();
//! assert!(layout.render().has_slot(Slot::DismissSurface));
//!
//! layout.navigate(1);
//! assert_eq!(*layout.visible_page(), "output page");
//! assert_eq!(layout.host().path, "/output");
//! assert!(!layout.render().panel_shown());
//! ```

mod config;
mod destination;
mod host;
mod layout;
mod policy;
mod render;
mod switcher;
mod viewport;

pub use config::LayoutConfig;
pub use destination::{Destination, slugify};
pub use host::Host;
pub use layout::{LayoutError, NavigationState, ResponsiveLayout};
pub use policy::{PanelDecision, RailMode};
pub use render::{Arrangement, LabelType, Rail, RailItem, RenderTree, Slot};
pub use switcher::ContentSwitcher;
pub use viewport::{Orientation, Viewport};
