use std::collections::BTreeMap;

use crate::geometry::site::Site;

use super::feature::{LineFeature, LineIdTrait};
use super::neighbor::NearestCandidates;

/// A proposed straight connector between two dangling endpoints.
///
/// Runs from the end point of the source (no-successor) line to the start
/// point of the destination (no-predecessor) line. Candidates live for a
/// single round; the angular filter either promotes one per source into an
/// artificial line or discards the whole group.
#[derive(Debug, Clone)]
pub struct ConnectorCandidate<ID>
where
    ID: LineIdTrait,
{
    pub source: ID,
    pub destination: ID,
    pub from: Site,
    pub to: Site,
}

/// Build one candidate per no-predecessor line, from its nearest target,
/// grouped by target id.
///
/// Only the rank-0 neighbor is used here; a no-predecessor line therefore
/// appears in exactly one group per round.
pub fn synthesize<ID>(
    features: &BTreeMap<ID, LineFeature<ID>>,
    nearest: &[NearestCandidates<ID>],
) -> BTreeMap<ID, Vec<ConnectorCandidate<ID>>>
where
    ID: LineIdTrait,
{
    let mut groups: BTreeMap<ID, Vec<ConnectorCandidate<ID>>> = BTreeMap::new();

    for candidates in nearest {
        let Some(source) = candidates.nearest() else {
            continue;
        };
        let (Some(source_feature), Some(destination_feature)) =
            (features.get(&source), features.get(&candidates.line_id))
        else {
            continue;
        };

        groups.entry(source).or_default().push(ConnectorCandidate {
            source,
            destination: candidates.line_id,
            from: source_feature.geometry().end(),
            to: destination_feature.geometry().start(),
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stitch::neighbor::find_nearest;
    use crate::stitch::pools::CandidatePools;

    fn feature(id: u32, sites: &[(f64, f64)]) -> LineFeature<u32> {
        let sites = sites.iter().map(|&(x, y)| Site::new(x, y)).collect();
        LineFeature::new(id, sites).unwrap()
    }

    fn network(list: Vec<LineFeature<u32>>) -> BTreeMap<u32, LineFeature<u32>> {
        list.into_iter().map(|f| (f.id(), f)).collect()
    }

    #[test]
    fn test_candidates_sharing_a_target_are_grouped() {
        // Line 1 dangles at (0, 0); lines 2 and 3 both start nearby, so both
        // pick it as their nearest target. Line 0 keeps the remaining
        // endpoints connected.
        let features = network(vec![
            feature(0, &[(2.0, -0.1), (-1.0, 0.0)]),
            feature(1, &[(-1.0, 0.0), (0.0, 0.0)]),
            feature(2, &[(0.5, 0.1), (2.0, 0.1)]),
            feature(3, &[(0.5, -0.1), (2.0, -0.1)]),
        ]);
        let pools = CandidatePools::extract(&features);
        let nearest = find_nearest(&features, &pools);

        let groups = synthesize(&features, &nearest);
        assert_eq!(groups.len(), 1);
        let group = groups.get(&1).unwrap();
        assert_eq!(group.len(), 2);
        for candidate in group {
            assert_eq!(candidate.source, 1);
            assert_eq!(candidate.from, Site::new(0.0, 0.0));
            assert_eq!(
                candidate.to,
                features[&candidate.destination].geometry().start()
            );
        }
    }
}
