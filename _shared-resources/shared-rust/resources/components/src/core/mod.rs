// Core infrastructure module
// Data model, styling, render state derivation and animation for the tab bar

pub mod animation;
pub mod descriptor;
pub mod error;
pub mod render_model;
pub mod styling;

pub use animation::{SpringAnimation, UnderlineAnimator};
pub use descriptor::{Icon, TabDescriptor};
pub use error::{check_selection, TabBarError, TabBarResult};
pub use render_model::{
    derive_render_state, slot_offset, slot_width,
    AccessibilityInfo, AccessibilityTraits, BadgeModel, ButtonAppearance,
    ButtonModel, RenderModel, UnderlineGeometry, BADGE_MARGIN,
};
pub use styling::{
    BackgroundFill, BackgroundMode, Invalidation, ShadowSide,
    StylingUpdate, TabBarStyling, UnderlinePosition,
};
