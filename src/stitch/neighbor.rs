use std::collections::BTreeMap;

use rstar::RTree;

use crate::container::index_object::EndpointObject;

use super::feature::{LineFeature, LineIdTrait};
use super::pools::CandidatePools;

/// Number of nearest endpoints retrieved per query.
///
/// Only the nearest candidate feeds the synthesizer; the remaining ranks are
/// retrieved and exposed but otherwise unused.
pub const NEIGHBOR_COUNT: usize = 3;

/// Nearest no-successor endpoints for one no-predecessor line.
#[derive(Debug, Clone)]
pub struct NearestCandidates<ID>
where
    ID: LineIdTrait,
{
    /// The queried no-predecessor line.
    pub line_id: ID,
    /// Up to [`NEIGHBOR_COUNT`] no-successor line ids, nearest first.
    pub ranked: Vec<ID>,
}

impl<ID> NearestCandidates<ID>
where
    ID: LineIdTrait,
{
    /// The rank-0 candidate, if the target pool was not empty.
    pub fn nearest(&self) -> Option<ID> {
        self.ranked.first().copied()
    }
}

/// For each no-predecessor line's start point, find the nearest no-successor
/// end points by euclidean distance.
///
/// The search tree is rebuilt by bulk load from the current pool snapshot on
/// every call; pools shrink between rounds, never during a search.
pub fn find_nearest<ID>(
    features: &BTreeMap<ID, LineFeature<ID>>,
    pools: &CandidatePools<ID>,
) -> Vec<NearestCandidates<ID>>
where
    ID: LineIdTrait,
{
    let targets = pools
        .no_successor()
        .iter()
        .filter_map(|id| {
            let feature = features.get(id)?;
            Some(EndpointObject::new(feature.geometry().end(), *id))
        })
        .collect::<Vec<_>>();
    let tree = RTree::bulk_load(targets);

    pools
        .no_predecessor()
        .iter()
        .filter_map(|id| {
            let start = features.get(id)?.geometry().start();
            let ranked = tree
                .nearest_neighbor_iter(&[start.x, start.y])
                .take(NEIGHBOR_COUNT)
                .map(|object| *object.line_id())
                .collect::<Vec<_>>();
            Some(NearestCandidates {
                line_id: *id,
                ranked,
            })
        })
        .collect()
}
