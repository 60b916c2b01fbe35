use std::collections::{BTreeMap, BTreeSet};

use crate::container::endpoint_registry::EndpointRegistry;

use super::feature::{LineFeature, LineIdTrait};

/// The two pools of dangling lines.
///
/// A line id is in `no_successor` iff no line of the full collection starts
/// at its end point, and in `no_predecessor` iff no line ends at its start
/// point, under exact coordinate equality. A fully isolated line sits in
/// both pools. Membership only shrinks: the convergence loop removes each
/// matched id from the pool it was matched in.
#[derive(Debug, Clone)]
pub struct CandidatePools<ID>
where
    ID: LineIdTrait,
{
    no_successor: BTreeSet<ID>,
    no_predecessor: BTreeSet<ID>,
}

impl<ID> CandidatePools<ID>
where
    ID: LineIdTrait,
{
    /// Classify every line of the network by its dangling endpoints.
    pub fn extract(features: &BTreeMap<ID, LineFeature<ID>>) -> Self {
        let mut registry = EndpointRegistry::new();
        for (id, feature) in features {
            registry.insert_start(feature.geometry().start(), *id);
            registry.insert_end(feature.geometry().end(), *id);
        }

        let mut no_successor = BTreeSet::new();
        let mut no_predecessor = BTreeSet::new();
        for (id, feature) in features {
            if registry.lines_starting_at(feature.geometry().end()).is_empty() {
                no_successor.insert(*id);
            }
            if registry.lines_ending_at(feature.geometry().start()).is_empty() {
                no_predecessor.insert(*id);
            }
        }

        Self {
            no_successor,
            no_predecessor,
        }
    }

    /// Lines missing a downstream neighbor, ordered by id.
    pub fn no_successor(&self) -> &BTreeSet<ID> {
        &self.no_successor
    }

    /// Lines missing an upstream neighbor, ordered by id.
    pub fn no_predecessor(&self) -> &BTreeSet<ID> {
        &self.no_predecessor
    }

    /// Remove a matched pair from the active pools.
    pub(crate) fn remove_matched(&mut self, source: ID, destination: ID) {
        self.no_successor.remove(&source);
        self.no_predecessor.remove(&destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::site::Site;

    fn feature(id: u32, sites: &[(f64, f64)]) -> LineFeature<u32> {
        let sites = sites.iter().map(|&(x, y)| Site::new(x, y)).collect();
        LineFeature::new(id, sites).unwrap()
    }

    fn features(list: Vec<LineFeature<u32>>) -> BTreeMap<u32, LineFeature<u32>> {
        list.into_iter().map(|f| (f.id(), f)).collect()
    }

    #[test]
    fn test_extract_classifies_dangling_lines() {
        // A feeds into B; C is detached on both sides.
        let features = features(vec![
            feature(1, &[(0.0, 0.0), (1.0, 0.0)]),
            feature(2, &[(1.0, 0.0), (2.0, 0.0)]),
            feature(3, &[(3.0, 0.0), (4.0, 0.0)]),
        ]);

        let pools = CandidatePools::extract(&features);
        assert_eq!(
            pools.no_successor().iter().copied().collect::<Vec<_>>(),
            vec![2, 3]
        );
        assert_eq!(
            pools.no_predecessor().iter().copied().collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_pools_are_strict_subsets_when_connected() {
        let features = features(vec![
            feature(1, &[(0.0, 0.0), (1.0, 0.0)]),
            feature(2, &[(1.0, 0.0), (2.0, 0.0)]),
        ]);

        let pools = CandidatePools::extract(&features);
        assert!(pools.no_successor().len() < features.len());
        assert!(pools.no_predecessor().len() < features.len());
    }

    #[test]
    fn test_isolated_line_is_in_both_pools() {
        let features = features(vec![feature(9, &[(0.0, 0.0), (1.0, 1.0)])]);
        let pools = CandidatePools::extract(&features);
        assert!(pools.no_successor().contains(&9));
        assert!(pools.no_predecessor().contains(&9));
    }

    #[test]
    fn test_endpoint_match_is_exact() {
        // B starts a hair away from A's end point, so both stay dangling.
        let features = features(vec![
            feature(1, &[(0.0, 0.0), (1.0, 0.0)]),
            feature(2, &[(1.0 + 1e-9, 0.0), (2.0, 0.0)]),
        ]);

        let pools = CandidatePools::extract(&features);
        assert!(pools.no_successor().contains(&1));
        assert!(pools.no_predecessor().contains(&2));
    }
}
