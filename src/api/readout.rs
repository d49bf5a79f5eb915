use serde::{Deserialize, Serialize};

use crate::core::DomainValue;

use super::DisplayFlags;

/// Control-panel text derived from the two points.
///
/// `formula` and `description` are `None` when their display flag is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceReadout {
    pub distance: u32,
    pub formula: Option<String>,
    pub description: Option<String>,
}

impl DistanceReadout {
    #[must_use]
    pub fn build(point_a: DomainValue, point_b: DomainValue, flags: DisplayFlags) -> Self {
        let distance = point_a.distance(point_b);
        Self {
            distance,
            formula: flags
                .show_formula
                .then(|| format!("= | {point_b} - ({point_a}) | = {distance}")),
            description: flags.show_description.then(|| describe(distance)),
        }
    }
}

fn describe(distance: u32) -> String {
    if distance == 0 {
        "The points coincide! The distance is 0.".to_owned()
    } else {
        format!("The distance from A to B is {distance}.")
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceReadout;
    use crate::api::DisplayFlags;
    use crate::core::DomainValue;

    #[test]
    fn formula_shows_b_minus_parenthesized_a() {
        let readout = DistanceReadout::build(
            DomainValue::saturating(-3),
            DomainValue::saturating(4),
            DisplayFlags::mount_defaults(),
        );
        assert_eq!(readout.distance, 7);
        assert_eq!(readout.formula.as_deref(), Some("= | 4 - (-3) | = 7"));
        assert_eq!(
            readout.description.as_deref(),
            Some("The distance from A to B is 7.")
        );
    }

    #[test]
    fn coincident_points_get_dedicated_description_and_hidden_formula() {
        let readout = DistanceReadout::build(
            DomainValue::saturating(2),
            DomainValue::saturating(2),
            DisplayFlags::reset_defaults(),
        );
        assert_eq!(readout.formula, None);
        assert_eq!(readout.description, None);

        let mut flags = DisplayFlags::reset_defaults();
        flags.show_description = true;
        let readout =
            DistanceReadout::build(DomainValue::saturating(2), DomainValue::saturating(2), flags);
        assert_eq!(
            readout.description.as_deref(),
            Some("The points coincide! The distance is 0.")
        );
    }
}
