//! ShadCN-style reusable UI components.
//!
//! This module provides a set of composable UI building blocks inspired by
//! shadcn/ui, rendered to HTML strings.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`card`], [`card_header`], [`card_content`]: Card container
//! - [`badge`]: Status badge/tag
//! - [`avatar`]: Initials avatar
//! - [`dropdown`]: Disclosure menu over a list of entries
//! - [`toast`]: Transient notification
//! - [`theme_toggle`]: Light/dark switch
//! - [`Icon`]: Inline SVG icons

mod avatar;
mod badge;
mod button;
mod card;
mod icons;
mod input;
mod menu;
mod separator;
mod theme_toggle;
mod toast;

pub use avatar::avatar;
pub use badge::{BadgeVariant, badge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{card, card_content, card_description, card_header, card_title};
pub use icons::Icon;
pub use input::input;
pub use menu::{MenuEntry, MenuItem, MenuTarget, dropdown};
pub use separator::{SeparatorOrientation, separator};
pub use theme_toggle::theme_toggle;
pub use toast::toast;
