#![forbid(unsafe_code)]

//! Carousel layout projection.
//!
//! This crate maps a carousel position to per-card visual placement:
//!
//! - [`circular_offset`] - signed shortest-path distance from the center
//! - [`project`] - one [`CardPlacement`] per card (slot, offset, scale, stacking)
//! - [`SelectionStatus`] - the selected-name label and the `k / n` indicator
//!
//! Everything here is a pure function of `(n, center)` and a [`LayoutConfig`].
//!
//! ```
//! use swiper_layout::{LayoutConfig, Slot, project};
//!
//! let placements = project(5, 2, &LayoutConfig::default());
//! assert_eq!(placements[2].slot, Slot::Center);
//! assert_eq!(placements[3].transform(), "translateX(140px) scale(0.92)");
//! assert_eq!(placements[0].z_index, 98);
//! ```

use std::fmt;

/// Label prefix for the selected card.
pub const SELECTED_PREFIX: &str = "Terpilih: ";

/// Prompt shown when there is no card to select.
pub const EMPTY_PROMPT: &str = "Geser untuk melihat siswa lainnya";

/// Tunables for the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance in pixels between neighbouring slots (default: 140).
    pub spacing_px: f64,
    /// Scale of the centered card (default: 1.12).
    pub center_scale: f64,
    /// Scale lost per step away from the center (default: 0.08).
    pub scale_step: f64,
    /// Lower bound for non-center scale (default: 0.8).
    pub min_scale: f64,
    /// Stacking order of the centered card; each step away subtracts one (default: 100).
    pub base_z: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_px: 140.0,
            center_scale: 1.12,
            scale_step: 0.08,
            min_scale: 0.8,
            base_z: 100,
        }
    }
}

impl LayoutConfig {
    /// Set the slot spacing.
    #[must_use]
    pub fn spacing(mut self, px: f64) -> Self {
        self.spacing_px = px;
        self
    }

    /// Set the center scale.
    #[must_use]
    pub fn center_scale(mut self, scale: f64) -> Self {
        self.center_scale = scale;
        self
    }

    /// Set the per-step scale falloff and its floor.
    #[must_use]
    pub fn falloff(mut self, step: f64, min_scale: f64) -> Self {
        self.scale_step = step;
        self.min_scale = min_scale;
        self
    }

    /// Scale for a card at `offset` from the center.
    #[must_use]
    pub fn scale_for(&self, offset: isize) -> f64 {
        if offset == 0 {
            return self.center_scale;
        }
        let distance = offset.unsigned_abs() as f64;
        (1.0 - distance * self.scale_step).max(self.min_scale)
    }
}

/// Visual class of a card relative to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Offset 0: the selected card.
    Center,
    /// Offset ±1: an immediate neighbour, drawn shrunk.
    Shrink,
    /// Everything further away.
    Hidden,
}

impl Slot {
    /// Classify a circular offset.
    #[must_use]
    pub const fn from_offset(offset: isize) -> Self {
        match offset.unsigned_abs() {
            0 => Self::Center,
            1 => Self::Shrink,
            _ => Self::Hidden,
        }
    }

    /// Presentation class name.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Shrink => "shrink",
            Self::Hidden => "hidden",
        }
    }
}

/// Placement of one card for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Card position in the collection.
    pub index: usize,
    /// Signed circular offset from the center, in `(-n/2, n/2]`.
    pub offset: isize,
    /// Visual class.
    pub slot: Slot,
    /// Horizontal translation in pixels.
    pub translate_x: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Stacking order; the center is always on top.
    pub z_index: i32,
}

impl CardPlacement {
    /// Whether this card is the centered one.
    #[must_use]
    pub const fn is_center(&self) -> bool {
        matches!(self.slot, Slot::Center)
    }

    /// Inline CSS `transform` value, e.g. `translateX(-140px) scale(0.92)`.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}px) scale({})", self.translate_x, self.scale)
    }
}

/// Wrap any signed index into `[0, n)`.
///
/// Returns `0` for an empty collection.
#[must_use]
pub fn normalize_index(index: isize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    index.rem_euclid(n as isize) as usize
}

/// Signed shortest-path distance from `center` to `index` on a ring of `n`.
///
/// The result lies in `(-n/2, n/2]`; for even `n` the opposite card sits at
/// `+n/2`. Returns `0` when `n == 0`.
#[must_use]
pub fn circular_offset(index: usize, center: usize, n: usize) -> isize {
    if n == 0 {
        return 0;
    }
    let forward = normalize_index(index as isize - center as isize, n);
    if 2 * forward > n {
        forward as isize - n as isize
    } else {
        forward as isize
    }
}

/// Compute placements for every card on a ring of `n` centered at `center`.
///
/// `center` is normalized into range first. An empty ring yields an empty
/// vector.
#[must_use]
pub fn project(n: usize, center: usize, config: &LayoutConfig) -> Vec<CardPlacement> {
    let center = normalize_index(center as isize, n);
    (0..n)
        .map(|index| {
            let offset = circular_offset(index, center, n);
            CardPlacement {
                index,
                offset,
                slot: Slot::from_offset(offset),
                translate_x: offset as f64 * config.spacing_px,
                scale: config.scale_for(offset),
                z_index: config.base_z - offset.unsigned_abs() as i32,
            }
        })
        .collect()
}

/// Derived status texts for the selection slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStatus {
    /// Text for the selected-info slot.
    pub selected_info: String,
    /// `"{k} / {n}"`, or `None` when the indicator must be hidden.
    pub position: Option<String>,
    /// Whether the "view profile" trigger is offered.
    pub profile_available: bool,
}

impl SelectionStatus {
    /// Status for a centered card at `center` (0-based) named `name` on a
    /// ring of `n`, or for an empty ring when `selected` is `None`.
    #[must_use]
    pub fn derive(selected: Option<(usize, &str)>, n: usize) -> Self {
        match selected {
            Some((center, name)) if n > 0 => Self {
                selected_info: format!("{SELECTED_PREFIX}{name}"),
                position: Some(format!("{} / {n}", center + 1)),
                profile_available: true,
            },
            _ => Self::empty(),
        }
    }

    /// Status when no card is centered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            selected_info: EMPTY_PROMPT.to_string(),
            position: None,
            profile_available: false,
        }
    }
}

impl fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} ({position})", self.selected_info),
            None => f.write_str(&self.selected_info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(n: usize, center: usize) -> Vec<isize> {
        project(n, center, &LayoutConfig::default())
            .iter()
            .map(|p| p.offset)
            .collect()
    }

    #[test]
    fn empty_ring_projects_nothing() {
        assert!(project(0, 0, &LayoutConfig::default()).is_empty());
        assert_eq!(circular_offset(3, 1, 0), 0);
        assert_eq!(normalize_index(-7, 0), 0);
    }

    #[test]
    fn single_card_is_center() {
        let p = project(1, 0, &LayoutConfig::default());
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].slot, Slot::Center);
        assert_eq!(p[0].transform(), "translateX(0px) scale(1.12)");
        assert_eq!(p[0].z_index, 100);
    }

    #[test]
    fn five_cards_centered_in_middle() {
        assert_eq!(offsets(5, 2), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn offsets_wrap_the_short_way() {
        assert_eq!(offsets(5, 0), vec![0, 1, 2, -2, -1]);
        assert_eq!(offsets(5, 4), vec![1, 2, -2, -1, 0]);
    }

    #[test]
    fn even_ring_opposite_card_is_positive() {
        assert_eq!(offsets(4, 0), vec![0, 1, 2, -1]);
        assert_eq!(offsets(4, 2), vec![2, -1, 0, 1]);
        assert_eq!(offsets(2, 1), vec![1, 0]);
    }

    #[test]
    fn slots_follow_distance() {
        let slots: Vec<_> = project(6, 0, &LayoutConfig::default())
            .iter()
            .map(|p| p.slot)
            .collect();
        assert_eq!(
            slots,
            vec![
                Slot::Center,
                Slot::Shrink,
                Slot::Hidden,
                Slot::Hidden,
                Slot::Hidden,
                Slot::Shrink
            ]
        );
    }

    #[test]
    fn scale_floors_at_minimum() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.scale_for(0), 1.12);
        assert_eq!(cfg.scale_for(1), 0.92);
        assert_eq!(cfg.scale_for(-2), 0.84);
        assert_eq!(cfg.scale_for(3), 0.8);
        assert_eq!(cfg.scale_for(10), 0.8);
    }

    #[test]
    fn transform_uses_signed_translation() {
        let p = project(5, 2, &LayoutConfig::default());
        assert_eq!(p[1].transform(), "translateX(-140px) scale(0.92)");
        assert_eq!(p[0].transform(), "translateX(-280px) scale(0.84)");
    }

    #[test]
    fn out_of_range_center_is_normalized() {
        assert_eq!(offsets(5, 7), offsets(5, 2));
    }

    #[test]
    fn custom_config_applies() {
        let cfg = LayoutConfig::default().spacing(100.0).center_scale(1.0);
        let p = project(3, 0, &cfg);
        assert_eq!(p[1].translate_x, 100.0);
        assert_eq!(p[0].scale, 1.0);
    }

    #[test]
    fn status_for_selected_card() {
        let status = SelectionStatus::derive(Some((3, "Budi")), 5);
        assert_eq!(status.selected_info, "Terpilih: Budi");
        assert_eq!(status.position.as_deref(), Some("4 / 5"));
        assert!(status.profile_available);
        assert_eq!(status.to_string(), "Terpilih: Budi (4 / 5)");
    }

    #[test]
    fn status_for_empty_ring() {
        let status = SelectionStatus::derive(None, 0);
        assert_eq!(status, SelectionStatus::empty());
        assert_eq!(status.selected_info, EMPTY_PROMPT);
        assert!(status.position.is_none());
        assert!(!status.profile_available);
    }

    #[test]
    fn slot_class_names() {
        assert_eq!(Slot::Center.class_name(), "center");
        assert_eq!(Slot::from_offset(-1).class_name(), "shrink");
        assert_eq!(Slot::from_offset(2).class_name(), "hidden");
    }
}
