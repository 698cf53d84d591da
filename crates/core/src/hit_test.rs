//! Click validation against stored answer coordinates.
//!
//! Coordinates are normalized: fractions of image width and height in
//! `[0, 1]`, origin top-left. The check is an axis-aligned box with one
//! tolerance shared by both axes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::input;
use crate::types::DbId;

/// Maximum per-axis distance (exclusive) between a click and an answer.
pub const HIT_TOLERANCE: f64 = 0.03;

/// Margin the game board clamps pointer events into before asking for a
/// check, i.e. clicks land in `[0.02, 0.98]`.
pub const DEFAULT_CLICK_MARGIN: f64 = 0.02;

/// A point in normalized image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from untrusted input, rejecting NaN and infinities.
    ///
    /// Values outside `[0, 1]` are accepted: claims are compared as sent.
    pub fn from_untrusted(x: f64, y: f64) -> Result<Self, CoreError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CoreError::Validation(
                "click.x and click.y must be finite numbers".to_string(),
            ));
        }
        Ok(Self { x, y })
    }
}

/// A validated "is character C at this point of scene S?" request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessClaim {
    pub scene_id: DbId,
    pub character_id: DbId,
    pub click: NormalizedPoint,
}

impl GuessClaim {
    /// Validate the raw `sceneId`, `characterId` and `click: {x, y}` fields.
    pub fn parse(
        scene_id: Option<&Value>,
        character_id: Option<&Value>,
        click: Option<&Value>,
    ) -> Result<Self, CoreError> {
        let scene_id = input::positive_int(scene_id, "sceneId")?;
        let character_id = input::positive_int(character_id, "characterId")?;

        let click = match click {
            Some(Value::Object(map)) => map,
            None | Some(Value::Null) => {
                return Err(CoreError::Validation("click is required".into()));
            }
            Some(_) => {
                return Err(CoreError::Validation(
                    "click must be an object with x and y".into(),
                ));
            }
        };
        let x = input::finite_number(click.get("x"), "click.x")?;
        let y = input::finite_number(click.get("y"), "click.y")?;

        Ok(Self {
            scene_id,
            character_id,
            click: NormalizedPoint::from_untrusted(x, y)?,
        })
    }
}

/// Decide whether `claim` hits `answer`.
///
/// True iff both `|dx|` and `|dy|` are strictly below [`HIT_TOLERANCE`].
pub fn evaluate(claim: NormalizedPoint, answer: NormalizedPoint) -> bool {
    let dx = (claim.x - answer.x).abs();
    let dy = (claim.y - answer.y).abs();
    dx < HIT_TOLERANCE && dy < HIT_TOLERANCE
}

/// Clamp a raw pointer position into `[margin, 1 - margin]` on both axes.
///
/// This runs upstream of [`evaluate`], on the side that converts pointer
/// events into normalized coordinates. `evaluate` itself never clamps.
pub fn clamp_to_margin(point: NormalizedPoint, margin: f64) -> NormalizedPoint {
    let lo = margin.clamp(0.0, 0.5);
    let hi = 1.0 - lo;
    NormalizedPoint {
        x: point.x.clamp(lo, hi),
        y: point.y.clamp(lo, hi),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn p(x: f64, y: f64) -> NormalizedPoint {
        NormalizedPoint::new(x, y)
    }

    #[test]
    fn exact_match_is_a_hit() {
        for a in [p(0.0, 0.0), p(0.432, 0.755), p(1.0, 1.0), p(0.5, 0.02)] {
            assert!(evaluate(a, a), "{a:?} must hit itself");
        }
    }

    #[test]
    fn close_click_hits() {
        // dx = 0.008, dy = 0.005
        assert!(evaluate(p(0.44, 0.76), p(0.432, 0.755)));
    }

    #[test]
    fn far_click_misses() {
        // dx = 0.068
        assert!(!evaluate(p(0.5, 0.5), p(0.432, 0.755)));
    }

    #[test]
    fn diff_equal_to_tolerance_misses() {
        // 0.0 + 0.03 - 0.0 is exactly HIT_TOLERANCE in f64.
        assert!(!evaluate(p(HIT_TOLERANCE, 0.0), p(0.0, 0.0)));
        assert!(!evaluate(p(0.0, HIT_TOLERANCE), p(0.0, 0.0)));
    }

    #[test]
    fn either_axis_out_of_tolerance_misses() {
        let answer = p(0.4, 0.4);
        assert!(!evaluate(p(0.4, 0.45), answer));
        assert!(!evaluate(p(0.35, 0.4), answer));
    }

    #[test]
    fn box_not_circle() {
        // Both diffs just under tolerance: Euclidean distance exceeds it, still a hit.
        assert!(evaluate(p(0.429, 0.429), p(0.4, 0.4)));
    }

    #[test]
    fn claims_outside_unit_square_are_not_clamped() {
        assert!(!evaluate(p(-0.5, 0.0), p(0.0, 0.0)));
        assert!(evaluate(p(1.01, 1.0), p(1.0, 1.0)));
    }

    #[test]
    fn from_untrusted_rejects_non_finite() {
        assert!(NormalizedPoint::from_untrusted(f64::NAN, 0.5).is_err());
        assert!(NormalizedPoint::from_untrusted(0.5, f64::INFINITY).is_err());
        assert!(NormalizedPoint::from_untrusted(1.5, -0.1).is_ok());
    }

    #[test]
    fn guess_claim_parses_valid_request() {
        let claim = GuessClaim::parse(
            Some(&json!(1)),
            Some(&json!("2")),
            Some(&json!({ "x": 0.44, "y": 0.76 })),
        )
        .unwrap();
        assert_eq!(claim.scene_id, 1);
        assert_eq!(claim.character_id, 2);
        assert_eq!(claim.click, p(0.44, 0.76));
    }

    #[test]
    fn guess_claim_rejects_missing_fields() {
        let click = json!({ "x": 0.1, "y": 0.1 });
        assert!(GuessClaim::parse(None, Some(&json!(1)), Some(&click)).is_err());
        assert!(GuessClaim::parse(Some(&json!(1)), None, Some(&click)).is_err());
        assert!(GuessClaim::parse(Some(&json!(1)), Some(&json!(1)), None).is_err());
        assert!(GuessClaim::parse(
            Some(&json!(1)),
            Some(&json!(1)),
            Some(&json!({ "x": 0.1 }))
        )
        .is_err());
        let click = json!("0.1,0.1");
        assert!(GuessClaim::parse(Some(&json!(1)), Some(&json!(1)), Some(&click)).is_err());
    }

    #[test]
    fn clamp_to_margin_bounds_both_axes() {
        let clamped = clamp_to_margin(p(0.0, 1.0), DEFAULT_CLICK_MARGIN);
        assert_eq!(clamped, p(0.02, 0.98));

        let inside = clamp_to_margin(p(0.3, 0.7), 0.04);
        assert_eq!(inside, p(0.3, 0.7));

        let wide = clamp_to_margin(p(0.01, 0.99), 0.04);
        assert_eq!(wide, p(0.04, 0.96));
    }
}
