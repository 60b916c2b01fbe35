use std::collections::BTreeMap;

use crate::error::StitchError;

use super::connector::synthesize;
use super::feature::{ArtificialLine, LineFeature, LineIdTrait};
use super::filter::disambiguate;
use super::neighbor::find_nearest;
use super::pools::CandidatePools;
use super::rules::StitchRules;

/// A round contributing fewer than this many new connectors ends the run.
///
/// Heuristic proxy for diminishing returns: once most resolvable gaps are
/// closed, the remaining dangling endpoints rarely have a plausible
/// neighbor within the angular threshold. The run may therefore terminate
/// with closable gaps unresolved.
pub const MIN_ROUND_YIELD: usize = 5;

/// Progress of one stitching round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: usize,
    /// Connector candidates proposed this round.
    pub candidates: usize,
    /// Connectors accepted this round.
    pub accepted: usize,
}

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct StitchOutcome<ID>
where
    ID: LineIdTrait,
{
    /// Accepted connectors, accumulated across all rounds.
    pub connectors: Vec<ArtificialLine<ID>>,
    /// Lines still missing a downstream neighbor after the last round.
    pub residual_no_successor: Vec<ID>,
    /// Lines still missing an upstream neighbor after the last round.
    pub residual_no_predecessor: Vec<ID>,
    /// Per-round progress, in order.
    pub rounds: Vec<RoundReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StitchState {
    Running,
    Done,
}

/// Iteratively closes the gaps of a line network.
///
/// Each round searches the nearest dangling counterpart for every line
/// without a predecessor, synthesizes straight connector candidates,
/// disambiguates them by angular alignment and removes every matched line
/// from the active pools. Rounds repeat until the yield of new connectors
/// drops below [`MIN_ROUND_YIELD`].
///
/// Pools are only mutated here, between rounds; every search observes a
/// consistent pool snapshot.
#[derive(Debug, Clone)]
pub struct GapStitcher<ID>
where
    ID: LineIdTrait,
{
    features: BTreeMap<ID, LineFeature<ID>>,
    rules: StitchRules,
    pools: CandidatePools<ID>,
    accepted: Vec<ArtificialLine<ID>>,
    reports: Vec<RoundReport>,
    previous_count: usize,
    state: StitchState,
}

impl<ID> GapStitcher<ID>
where
    ID: LineIdTrait,
{
    /// Validate the inputs and classify the dangling lines.
    ///
    /// Fails if the rules are invalid or two features share an id; feature
    /// geometry is already validated at [`LineFeature::new`].
    pub fn new(features: Vec<LineFeature<ID>>, rules: StitchRules) -> Result<Self, StitchError> {
        rules.validate()?;

        let mut collection = BTreeMap::new();
        for feature in features {
            let id = feature.id();
            if collection.insert(id, feature).is_some() {
                return Err(StitchError::DuplicateLineId {
                    line: id.to_string(),
                });
            }
        }

        let pools = CandidatePools::extract(&collection);
        Ok(Self {
            features: collection,
            rules,
            pools,
            accepted: Vec::new(),
            reports: Vec::new(),
            previous_count: 0,
            state: StitchState::Running,
        })
    }

    /// Whether the run has converged.
    pub fn is_done(&self) -> bool {
        self.state == StitchState::Done
    }

    /// The current pools of still-unmatched lines.
    pub fn pools(&self) -> &CandidatePools<ID> {
        &self.pools
    }

    /// The connectors accepted so far, across all completed rounds.
    pub fn connectors(&self) -> &[ArtificialLine<ID>] {
        &self.accepted
    }

    /// Run a single round. Once the run has converged this is a no-op.
    pub fn round(mut self) -> Self {
        if self.is_done() {
            return self;
        }

        let nearest = find_nearest(&self.features, &self.pools);
        let groups = synthesize(&self.features, &nearest);
        let candidates = groups.values().map(Vec::len).sum();
        let accepted = disambiguate(&self.features, &groups, &self.rules);

        for line in &accepted {
            self.pools.remove_matched(line.source(), line.destination());
        }
        let accepted_count = accepted.len();
        self.accepted.extend(accepted);
        self.reports.push(RoundReport {
            round: self.reports.len() + 1,
            candidates,
            accepted: accepted_count,
        });

        if self.accepted.len().abs_diff(self.previous_count) < MIN_ROUND_YIELD {
            self.state = StitchState::Done;
        } else {
            self.previous_count = self.accepted.len();
        }
        self
    }

    /// Run at most `n` rounds. Callers wanting to bound the runtime of a
    /// pathological input can use this instead of [`GapStitcher::run`].
    pub fn run_n_rounds(mut self, n: usize) -> Self {
        for _ in 0..n {
            self = self.round();
        }
        self
    }

    /// Run rounds until convergence.
    pub fn run(mut self) -> Self {
        while !self.is_done() {
            self = self.round();
        }
        self
    }

    /// Consume the stitcher and return the accumulated connectors together
    /// with the residual pools.
    pub fn finish(self) -> StitchOutcome<ID> {
        StitchOutcome {
            connectors: self.accepted,
            residual_no_successor: self.pools.no_successor().iter().copied().collect(),
            residual_no_predecessor: self.pools.no_predecessor().iter().copied().collect(),
            rounds: self.reports,
        }
    }
}

/// Close the gaps of a line network in one call.
pub fn close_gaps<ID>(
    features: Vec<LineFeature<ID>>,
    rules: StitchRules,
) -> Result<StitchOutcome<ID>, StitchError>
where
    ID: LineIdTrait,
{
    Ok(GapStitcher::new(features, rules)?.run().finish())
}
