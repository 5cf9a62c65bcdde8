#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use party::game::facing::Facing;
use party::game::follow::{History, PartyMember, Snapshot};
use party::game::input::InputState;
use party::game::params::Params;
use party::game::render::SpriteId;
use party::game::state::GameState;

fn right() -> InputState {
    InputState {
        right: true,
        ..Default::default()
    }
}

fn snap(x: f32) -> Snapshot {
    Snapshot {
        x,
        y: 0.0,
        facing: Facing::new(1, 0),
    }
}

#[test]
fn test_history_is_fifo_with_fixed_length() {
    let mut history = History::filled(3, Snapshot::neutral(0.0, 50.0));
    assert_eq!(history.len(), 3);

    assert_eq!(history.advance(snap(1.0)), Snapshot::neutral(0.0, 50.0));
    assert_eq!(history.advance(snap(2.0)), Snapshot::neutral(0.0, 50.0));
    assert_eq!(history.advance(snap(3.0)), Snapshot::neutral(0.0, 50.0));
    assert_eq!(history.advance(snap(4.0)), snap(1.0));
    assert_eq!(history.advance(snap(5.0)), snap(2.0));

    assert_eq!(history.len(), 3);
    let xs: Vec<f32> = history.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0]);
    assert_eq!(history.front(), Some(&snap(3.0)));
    assert_eq!(history.back(), Some(&snap(5.0)));
}

#[test]
fn test_empty_history_passes_through() {
    let mut history = History::filled(0, Snapshot::neutral(0.0, 0.0));
    assert!(history.is_empty());

    assert_eq!(history.advance(snap(7.0)), snap(7.0));
    assert!(history.is_empty());
}

#[test]
fn test_member_ignores_ticks_without_leader_velocity() {
    let start = Snapshot::neutral(0.0, 50.0);
    let mut member = PartyMember::new("Test", SpriteId::Member(0), 24.0, 75.0, 2, start);

    member.follow(snap(1.0), false);
    member.follow(snap(2.0), false);

    assert_eq!(member.current, start);
    assert!(member.history().iter().all(|s| *s == start));

    member.follow(snap(3.0), true);
    member.follow(snap(4.0), true);
    member.follow(snap(5.0), true);
    assert_eq!(member.current, snap(3.0));
}

#[test]
fn test_initial_party_has_startup_delay() {
    let params = Params::default();
    let state = GameState::new(&params);

    assert_eq!(state.party.len(), 2);
    assert_eq!(state.party[0].history().len(), 12);
    assert_eq!(state.party[1].history().len(), 24);

    for member in &state.party {
        assert_eq!(member.current, Snapshot::neutral(0.0, 50.0));
        assert!(
            member
                .history()
                .iter()
                .all(|s| *s == Snapshot::neutral(0.0, 50.0))
        );
    }
    assert_eq!(state.party[0].sprite, SpriteId::Member(0));
    assert_eq!(state.party[1].width, 22.0);
    assert_eq!(state.party[1].height, 43.0);
}

#[test]
fn test_no_input_keeps_everyone_still() {
    let params = Params::default();
    let mut state = GameState::new(&params);
    let initial = state.clone();

    for _ in 0..100 {
        state.tick(&InputState::default(), &params);
    }

    assert_eq!(state.leader, initial.leader);
    assert_eq!(state.party, initial.party);
    assert_eq!(state.ticks, 100);
}

#[test]
fn test_first_member_starts_following_after_distance_ticks() {
    let params = Params::default();
    let mut state = GameState::new(&params);

    for _ in 0..params.follow_distance {
        state.tick(&right(), &params);
        assert_eq!(state.party[0].current.x, 0.0);
    }

    state.tick(&right(), &params);

    // the leader's position after its first movement tick
    assert_eq!(state.party[0].current.x, 2.0);
    assert_eq!(state.party[0].current.facing, Facing::new(1, 0));
    assert_eq!(state.party[1].current.x, 0.0);
}

#[test]
fn test_member_replays_leader_history() {
    let params = Params::default();
    let mut state = GameState::new(&params);
    let mut recorded = Vec::new();

    for tick in 1..=60usize {
        state.tick(&right(), &params);
        recorded.push(state.leader.snapshot());

        for (i, member) in state.party.iter().enumerate() {
            let delay = params.history_len(i);
            if tick > delay {
                assert_eq!(member.current, recorded[tick - delay - 1]);
            } else {
                assert_eq!(member.current, Snapshot::neutral(0.0, 50.0));
            }
            assert_eq!(member.history().len(), delay);
            assert_eq!(member.history().back(), Some(&state.leader.snapshot()));
        }
    }
}

#[test]
fn test_idle_ticks_freeze_the_trail() {
    let params = Params::default();
    let mut state = GameState::new(&params);

    for _ in 0..40 {
        state.tick(&right(), &params);
    }
    // slide to a stop
    while state.leader.has_velocity() {
        state.tick(&InputState::default(), &params);
    }
    let frozen = state.party.clone();

    for _ in 0..50 {
        state.tick(&InputState::default(), &params);
    }

    assert_eq!(state.party, frozen);
}

#[test]
fn test_sliding_advances_the_trail() {
    let params = Params::default();
    let mut state = GameState::new(&params);

    for _ in 0..20 {
        state.tick(&right(), &params);
    }
    let before = state.party[0].current;

    // released, but still sliding at 0.5
    state.tick(&InputState::default(), &params);
    assert!(!state.leader.moving);
    assert!(state.leader.has_velocity());
    assert_ne!(state.party[0].current, before);
}

#[test]
fn test_idle_snapshot_keeps_last_facing() {
    let params = Params::default();
    let mut state = GameState::new(&params);

    for _ in 0..3 {
        state.tick(&right(), &params);
    }
    state.tick(&InputState::default(), &params);

    // sliding tick after release still records a right-facing snapshot
    assert!(state.leader.has_velocity());
    let newest = state.party[0].history().back().copied();
    assert_eq!(newest, Some(state.leader.snapshot()));
    assert_eq!(newest.map(|s| s.facing), Some(Facing::new(1, 0)));
}
