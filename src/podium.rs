//! Top-3 selection out of a fixed population using only a group-race primitive, under a hard
//! cap on the number of races run.

use std::array;

use itertools::Itertools;

/// Identifies one runner in the fixed population `0..population(G)`.
pub type Participant = usize;

/// The outcome of one race: every lane's occupant, fastest first.
pub type RaceResult<const G: usize> = [Participant; G];

/// The race primitive injected into [`race_podium`]: a capability which seats exactly `G`
/// distinct participants and reports them reordered by descending speed, ties broken by
/// ascending identifier.
///
/// The ranker never observes speeds directly, only the orderings this oracle returns, and it
/// calls the oracle strictly sequentially since each race is chosen from the outcomes of the
/// previous ones. The oracle must honor a strict total order; one that does not yields an
/// unspecified (but still terminating) podium.
///
/// There is a blanket implementation for closures, so tests can inject a comparator backed by
/// a plain speed table.
pub trait RaceOracle<const G: usize> {
    /// Race the given `lanes` and return the full finishing order, fastest first.
    fn run_race(&mut self, lanes: [Participant; G]) -> RaceResult<G>;
}

impl<const G: usize, F> RaceOracle<G> for F
where
    F: FnMut([Participant; G]) -> RaceResult<G>,
{
    fn run_race(&mut self, lanes: [Participant; G]) -> RaceResult<G> {
        self(lanes)
    }
}

/// The population size ranked by [`race_podium`] for a given lane count: `lanes` disjoint
/// heats of `lanes` participants each.
pub const fn population(lanes: usize) -> usize {
    lanes * lanes
}

/// The hard cap on oracle invocations [`race_podium`] may spend for a given lane count.
///
/// One race per heat and one race among the heat winners always happen; the five remaining
/// podium contenders then fit a single decisive race when `lanes >= 5` and need up to two
/// when `lanes == 4`. Both canonical cases (16 participants in lanes of 4, 25 in lanes of 5)
/// come out to 7.
pub const fn race_budget(lanes: usize) -> usize {
    if lanes >= 5 {
        lanes + 2
    } else {
        lanes + 3
    }
}

/// Determine the top three of `population(G)` participants, fastest first, spending at most
/// [`race_budget`]`(G)` calls to `oracle`.
///
/// The elimination strategy:
///
/// 1. Heats: participants race in `G` disjoint heats of `G`, heat `h` seating the contiguous
///    identifiers `h * G..(h + 1) * G`.
/// 2. Finals: the heat winners race once. The finals winner beat every other heat winner, each
///    of whom beat the rest of their heat, so it is provably the fastest overall.
/// 3. By transitivity, second place overall lost only to the champion, and third place lost
///    only to the champion and to second. That restricts the rest of the podium to five
///    participants regardless of population: the 2nd and 3rd of the champion's own heat, the
///    2nd and 3rd of the finals, and the 2nd of the heat won by the finals runner-up.
/// 4. With `G >= 5` lanes, one more race over all five contenders settles the podium. With
///    `G == 4`, a race among the champion's-heat 2nd/3rd and the finals 2nd/3rd settles second
///    place, and settles third too unless the finals runner-up won it, in which case the heat
///    runner-up behind it is still live and one last race decides.
///
/// When a decisive race has fewer than `G` genuine contenders, the free lanes are filled with
/// participants already proven off the podium; their finishing positions are ignored.
pub fn race_podium<const G: usize, R>(oracle: &mut R) -> [Participant; 3]
where
    R: RaceOracle<G>,
{
    const { assert!(G >= 4, "the elimination strategy seats at least four per race") };

    let heats: Vec<RaceResult<G>> = (0..G)
        .map(|heat| oracle.run_race(array::from_fn(|lane| heat * G + lane)))
        .collect_vec();

    let finals = oracle.run_race(array::from_fn(|heat| heats[heat][0]));
    let champion = finals[0];

    // participant ids are dense, so the heat a participant ran in is recoverable by division
    let champion_heat = &heats[champion / G];
    let runner_up_heat = &heats[finals[1] / G];
    let contenders = [
        champion_heat[1],
        champion_heat[2],
        finals[1],
        finals[2],
        runner_up_heat[1],
    ];

    if G >= 5 {
        // Heat last-placers lost to at least three heat-mates, so they are off the podium and
        // safe to seat as filler in the remaining lanes.
        let mut lanes = contenders.to_vec();
        lanes.extend((0..G - contenders.len()).map(|heat| heats[heat][G - 1]));
        let decisive = oracle.run_race(seated(&lanes));
        return [champion, decisive[0], decisive[1]];
    }

    // G == 4 from here down
    let [a2, a3, w2, w3, b2] = contenders;
    let decisive = oracle.run_race(seated(&[w2, w3, a2, a3]));
    let second = decisive[0];
    if second == a2 {
        // b2 lost to w2, which just lost to a2, so the rest of this race settles third
        return [champion, second, decisive[1]];
    }

    // second == w2, which leaves b2 live for third place alongside the rest of the decisive race
    let tiebreak = oracle.run_race(seated(&[decisive[1], decisive[2], decisive[3], b2]));
    [champion, second, tiebreak[0]]
}

fn seated<const G: usize>(lanes: &[Participant]) -> [Participant; G] {
    debug_assert_eq!(lanes.len(), G);
    array::from_fn(|lane| lanes[lane])
}
