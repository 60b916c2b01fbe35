use std::collections::BTreeMap;

use crate::geometry::bearing::{bearing, deviation};
use crate::geometry::polyline::Polyline;

use super::connector::ConnectorCandidate;
use super::feature::{ArtificialLine, LineFeature, LineIdTrait};
use super::rules::StitchRules;

/// Pick and accept at most one connector per candidate group.
///
/// Within a group the winner is the candidate whose destination line best
/// aligns with the source line (smallest bearing deviation, first strict
/// improvement wins). The winner is accepted only if both its deviation and
/// the connector's own deviation from the destination line stay below the
/// threshold, and it does not connect a line to itself. A rejected group
/// yields nothing; both sides stay in their pools for the next round.
///
/// A candidate involving a zero-length segment has no defined bearing and is
/// scored as infinitely misaligned, so it can never win against a defined
/// candidate nor pass the threshold.
pub fn disambiguate<ID>(
    features: &BTreeMap<ID, LineFeature<ID>>,
    groups: &BTreeMap<ID, Vec<ConnectorCandidate<ID>>>,
    rules: &StitchRules,
) -> Vec<ArtificialLine<ID>>
where
    ID: LineIdTrait,
{
    let mut accepted = Vec::new();

    for (source, group) in groups {
        let source_bearing = features.get(source).and_then(|feature| {
            let (from, to) = feature.geometry().last_segment();
            bearing(from, to)
        });

        let mut best: Option<(&ConnectorCandidate<ID>, f64, f64)> = None;
        for candidate in group {
            let destination_bearing = features.get(&candidate.destination).and_then(|feature| {
                let (from, to) = feature.geometry().first_segment();
                bearing(from, to)
            });
            let connector_bearing = bearing(candidate.from, candidate.to);

            let angle = match (source_bearing, destination_bearing) {
                (Some(a), Some(b)) => deviation(a, b),
                _ => f64::INFINITY,
            };
            let angle_art = match (connector_bearing, destination_bearing) {
                (Some(a), Some(b)) => deviation(a, b),
                _ => f64::INFINITY,
            };

            let improves = match &best {
                None => angle < f64::INFINITY,
                Some((_, best_angle, _)) => angle < *best_angle,
            };
            if improves {
                best = Some((candidate, angle, angle_art));
            }
        }

        let Some((candidate, angle, angle_art)) = best else {
            continue;
        };
        if angle >= rules.angle_threshold || angle_art >= rules.angle_threshold {
            continue;
        }
        if candidate.source == candidate.destination {
            continue;
        }
        if let Some(geometry) = Polyline::new(vec![candidate.from, candidate.to]) {
            accepted.push(ArtificialLine::new(
                candidate.source,
                candidate.destination,
                geometry,
                angle,
                angle_art,
            ));
        }
    }

    accepted
}
