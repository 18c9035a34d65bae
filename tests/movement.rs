use glam::IVec2;
use pacman_sim::{
    game::on_time_elapsed,
    map::{direction::Direction, is_on_track, is_way_free_at, screen_from_tile, screen_from_tile_coordinate},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;
use common::store_with_pac_man_at;

#[test]
fn advances_pac_mans_position() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);
    assert_eq!(store.pac_man().x(), 30);

    on_time_elapsed(&mut store, 1);
    assert_eq!(store.pac_man().x(), 32);

    on_time_elapsed(&mut store, 2);
    assert_eq!(store.pac_man().x(), 34);
    assert_eq!(store.pac_man().y(), 30);
}

#[test]
fn moves_the_same_distance_regardless_of_frame_interval() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);

    on_time_elapsed(&mut store, 1);
    on_time_elapsed(&mut store, 18);
    on_time_elapsed(&mut store, 500);

    assert_eq!(store.pac_man().x(), 36);
}

#[test]
fn stops_pac_man_once_he_is_dying() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);

    store.kill_pac_man(pacman_sim::entity::ghost::GhostId::Blinky);
    on_time_elapsed(&mut store, 1);

    assert_eq!(store.pac_man().x(), 30);
    assert_eq!(store.pac_man().velocity(), IVec2::ZERO);
}

#[test]
fn stops_pac_man_when_he_hits_a_wall() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Left);

    on_time_elapsed(&mut store, 1);
    assert_eq!(store.pac_man().x(), 30);
    assert_eq!(store.pac_man().velocity(), IVec2::ZERO);

    on_time_elapsed(&mut store, 2);
    assert_eq!(store.pac_man().position(), screen_from_tile(IVec2::new(1, 1)));
}

#[test]
fn changes_direction_once_the_way_is_free() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Left);
    store.pac_man_mut().place_at(IVec2::new(32, 30));
    store.pac_man_mut().queue_direction(Direction::Down);

    on_time_elapsed(&mut store, 1);
    assert_eq!(store.pac_man().x(), 30);
    assert_eq!(store.pac_man().y(), 30);
    assert_eq!(store.pac_man().direction(), Direction::Left);

    on_time_elapsed(&mut store, 2);
    assert_eq!(store.pac_man().direction(), Direction::Down);
    assert_eq!(store.pac_man().x(), 30);
    assert_eq!(store.pac_man().y(), 32);
}

#[test]
fn keeps_a_blocked_turn_queued() {
    // Heading right along the top corridor, asking to go up into the outer wall
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);
    store.set_pressed_key("up");

    on_time_elapsed(&mut store, 1);

    assert_eq!(store.pac_man().direction(), Direction::Right);
    assert_eq!(store.pac_man().next_direction(), Direction::Up);
    assert_eq!(store.pac_man().x(), 32);
}

#[test]
fn a_turn_at_a_wall_overrides_stopping() {
    // (1, 1) is the top-left corner: left is a wall, down is open
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Left);
    store.set_pressed_key("ArrowDown");

    on_time_elapsed(&mut store, 1);

    assert_eq!(store.pac_man().direction(), Direction::Down);
    assert_eq!(store.pac_man().position(), IVec2::new(30, 32));
}

#[test]
fn ignores_unrecognised_keys() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);

    assert!(!store.set_pressed_key("space"));
    assert!(!store.set_pressed_key(""));
    assert_eq!(store.pac_man().next_direction(), Direction::Right);
}

#[test]
fn only_turns_at_tile_centers() {
    let mut store = store_with_pac_man_at(IVec2::new(2, 5), Direction::Right);
    store.set_pressed_key("down");

    // (2, 6) through (5, 6) are walls, so the first chance to go down is at (6, 5)
    for timestamp in 1..=50 {
        on_time_elapsed(&mut store, timestamp);
        let pac_man = store.pac_man();
        if pac_man.direction() == Direction::Down {
            assert_eq!(pac_man.x(), screen_from_tile_coordinate(6));
            return;
        }
        assert_eq!(pac_man.y(), screen_from_tile_coordinate(5));
    }
    panic!("Pac-Man never turned down");
}

#[test]
fn refuses_placements_off_the_track() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);
    let start = store.pac_man().position();

    // Odd pixels, between two rows, inside a wall and outside the maze
    for position in [IVec2::new(31, 30), IVec2::new(40, 40), IVec2::new(50, 50), IVec2::new(-10, 30)] {
        assert_that(&store.pac_man_mut().place_at(position)).is_false();
        assert_eq!(store.pac_man().position(), start);
    }
}

#[test]
fn refused_placements_cannot_walk_through_walls() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);
    store.pac_man_mut().place_at(IVec2::new(31, 30));
    store.pac_man_mut().head(Direction::Left);

    for timestamp in 1..=40 {
        on_time_elapsed(&mut store, timestamp);
        let pac_man = store.pac_man();
        assert_that(&pac_man.x()).is_greater_than_or_equal_to(screen_from_tile_coordinate(1));
        assert_that(&is_on_track(pac_man.position())).is_true();
        assert_that(&is_way_free_at(pac_man.tile().x, pac_man.tile().y)).is_true();
    }
}

#[test]
fn placing_between_tiles_keeps_to_the_corridor() {
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Right);
    assert_that(&store.pac_man_mut().place_at(IVec2::new(34, 30))).is_true();

    // A perpendicular heading cannot apply mid-tile, so it is only queued
    assert_that(&store.pac_man_mut().head(Direction::Down)).is_false();
    assert_eq!(store.pac_man().direction(), Direction::Right);
    assert_eq!(store.pac_man().next_direction(), Direction::Down);

    for timestamp in 1..=200 {
        on_time_elapsed(&mut store, timestamp);
        assert_that(&is_on_track(store.pac_man().position())).is_true();
    }
}

#[test]
fn refuses_placing_across_the_current_heading() {
    // Heading down, a spot between two tiles of a row is not reachable
    let mut store = store_with_pac_man_at(IVec2::new(1, 1), Direction::Down);
    assert_that(&store.pac_man_mut().place_at(IVec2::new(34, 30))).is_false();

    assert_that(&store.pac_man_mut().place_at(IVec2::new(30, 34))).is_true();
    assert_eq!(store.pac_man().velocity(), Direction::Down.velocity());
}
