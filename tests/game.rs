use glam::IVec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use tilepac::entity::{Direction, Food, Player, Sprite, SpriteKind};
use tilepac::error::{EntityError, GameError};
use tilepac::game::points::{PointInspector, PointManager};
use tilepac::game::{Game, MoveOutcome};
use tilepac::map::board::Board;

mod common;
use common::{first_ghost, game_from, kind_at, ChangeCounter};

#[test]
fn test_player_eats_food() {
    let mut game = game_from(&["P.."]);

    let outcome = game.move_player(Direction::Right).unwrap();

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(game.location_of(game.player_id()).unwrap(), IVec2::new(1, 0));
    assert_eq!(kind_at(&game, 1, 0), SpriteKind::Player);
    assert_eq!(kind_at(&game, 0, 0), SpriteKind::Empty);
    assert_that(&game.player().unwrap().points()).is_equal_to(Food::DEFAULT_POINTS);
    assert_that(&game.points().food_eaten()).is_equal_to(10);
    assert!(!game.won());
}

#[test]
fn test_eaten_food_is_gone_for_good() {
    let mut game = game_from(&["P.."]);

    game.move_player(Direction::Right).unwrap();
    game.move_player(Direction::Left).unwrap();

    assert_eq!(kind_at(&game, 1, 0), SpriteKind::Empty);
    assert_eq!(game.points().food_eaten(), 10);
}

#[test]
fn test_eating_all_food_wins() {
    let mut game = game_from(&["P.."]);

    game.move_player(Direction::Right).unwrap();
    game.move_player(Direction::Right).unwrap();

    assert!(game.won());
    assert!(!game.died());
    assert_eq!(game.player().unwrap().points(), 20);
}

#[test]
fn test_map_without_food_is_won_from_the_start() {
    let game = game_from(&["P G"]);

    assert!(game.won());
    assert_eq!(game.points().total_food_in_game(), 0);
}

#[test]
fn test_wall_blocks_player_without_notification() {
    let mut game = game_from(&["#P#"]);
    let counter = ChangeCounter::default();
    counter.attach_to(&mut game);

    assert_eq!(game.move_player(Direction::Left).unwrap(), MoveOutcome::Blocked);
    assert_eq!(game.move_player(Direction::Right).unwrap(), MoveOutcome::Blocked);

    assert_eq!(game.location_of(game.player_id()).unwrap(), IVec2::new(1, 0));
    assert_eq!(game.player().unwrap().direction(), Direction::Left);
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_successful_moves_notify_once_each() {
    let mut game = game_from(&["P  ", "  G"]);
    let counter = ChangeCounter::default();
    counter.attach_to(&mut game);
    let ghost = first_ghost(&game);

    game.move_player(Direction::Right).unwrap();
    game.move_ghost(ghost, Direction::Left).unwrap();

    assert_eq!(counter.count(), 2);
}

#[test]
fn test_player_remembers_last_direction() {
    let mut game = game_from(&["   ", " P ", "   "]);

    game.move_player(Direction::Up).unwrap();
    assert_eq!(game.player().unwrap().direction(), Direction::Up);

    game.move_player(Direction::Right).unwrap();
    assert_eq!(game.player().unwrap().direction(), Direction::Right);
}

#[test]
fn test_player_tunnels_through_edge() {
    let mut game = game_from(&["P.."]);

    assert_eq!(game.move_player(Direction::Left).unwrap(), MoveOutcome::Moved);

    assert_eq!(game.location_of(game.player_id()).unwrap(), IVec2::new(2, 0));
    assert_eq!(game.points().food_eaten(), 10);
}

#[test]
fn test_player_walking_into_ghost_dies_on_its_tile() {
    let mut game = game_from(&["PG#"]);

    assert_eq!(game.move_player(Direction::Right).unwrap(), MoveOutcome::Moved);

    assert!(game.died());
    assert_eq!(game.location_of(game.player_id()).unwrap(), IVec2::new(1, 0));
    assert_eq!(kind_at(&game, 1, 0), SpriteKind::Player);
    assert_eq!(game.board().tile_at(1, 0).unwrap().sprites().len(), 2);
}

#[test]
fn test_ghost_walking_into_player_kills_it() {
    let mut game = game_from(&["PG#"]);
    let ghost = first_ghost(&game);

    assert_eq!(game.move_ghost(ghost, Direction::Left).unwrap(), MoveOutcome::Moved);

    assert!(game.died());
    assert_eq!(kind_at(&game, 0, 0), SpriteKind::Ghost);
}

#[test]
fn test_dead_player_does_not_move() {
    let mut game = game_from(&["PG "]);
    game.move_player(Direction::Right).unwrap();
    let counter = ChangeCounter::default();
    counter.attach_to(&mut game);

    assert_eq!(game.move_player(Direction::Right).unwrap(), MoveOutcome::Ignored);

    assert_eq!(game.location_of(game.player_id()).unwrap(), IVec2::new(1, 0));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_ghost_leaves_food_behind() {
    let mut game = game_from(&["P.G"]);
    let ghost = first_ghost(&game);

    game.move_ghost(ghost, Direction::Left).unwrap();
    assert_eq!(kind_at(&game, 1, 0), SpriteKind::Ghost);

    game.move_ghost(ghost, Direction::Right).unwrap();
    assert_eq!(kind_at(&game, 1, 0), SpriteKind::Food);
    assert_eq!(game.points().food_eaten(), 0);
    assert_eq!(game.player().unwrap().points(), 0);
}

#[test]
fn test_ghost_is_blocked_by_wall() {
    let mut game = game_from(&["P#G#"]);
    let ghost = first_ghost(&game);

    assert_eq!(game.move_ghost(ghost, Direction::Left).unwrap(), MoveOutcome::Blocked);
    assert_eq!(game.move_ghost(ghost, Direction::Right).unwrap(), MoveOutcome::Blocked);
    assert_eq!(game.location_of(ghost).unwrap(), IVec2::new(2, 0));
}

#[test]
fn test_ghosts_can_share_a_tile() {
    let mut game = game_from(&["P GG"]);
    let ghosts = game.ghosts();

    game.move_ghost(ghosts[1], Direction::Left).unwrap();

    assert_eq!(game.board().tile_at(2, 0).unwrap().sprites(), &[ghosts[0], ghosts[1]]);
}

#[test]
fn test_move_ghost_rejects_non_ghost() {
    let mut game = game_from(&["P G"]);
    let player = game.player_id();

    let result = game.move_ghost(player, Direction::Right);

    assert!(matches!(result, Err(GameError::Entity(EntityError::NotAGhost(id))) if id == player));
}

#[test]
fn test_ghosts_returns_a_snapshot() {
    let game = game_from(&["PGG"]);

    let mut ghosts = game.ghosts();
    ghosts.clear();

    assert_eq!(game.ghosts().len(), 2);
}

#[test]
fn test_resurrected_player_moves_again() {
    let mut game = game_from(&["PG "]);
    game.move_player(Direction::Right).unwrap();
    assert!(game.died());

    game.player_mut().unwrap().resurrect();

    assert!(!game.died());
    assert_eq!(game.move_player(Direction::Right).unwrap(), MoveOutcome::Moved);
}

#[test]
fn test_from_parts_checks_sprite_kinds() {
    let mut board = Board::new(2, 1);
    let wall = board.spawn(Sprite::Wall);
    let player = board.spawn(Sprite::Player(Player::new()));
    board.place(player, 0, 0).unwrap();

    let not_a_player = Game::from_parts(board.clone(), wall, Vec::new(), PointManager::new());
    assert!(matches!(not_a_player, Err(GameError::Entity(EntityError::NotAPlayer(_)))));

    let not_a_ghost = Game::from_parts(board, player, vec![wall], PointManager::new());
    assert!(matches!(not_a_ghost, Err(GameError::Entity(EntityError::NotAGhost(_)))));
}

#[test]
fn test_custom_food_points() {
    let mut board = Board::new(2, 1);
    let player = board.spawn(Sprite::Player(Player::new()));
    let food = board.spawn(Sprite::Food(Food::new(50)));
    board.place(player, 0, 0).unwrap();
    board.place(food, 1, 0).unwrap();
    let mut points = PointManager::new();
    points.add_points_to_board(50);
    let mut game = Game::from_parts(board, player, Vec::new(), points).unwrap();

    game.move_player(Direction::Right).unwrap();

    assert_eq!(game.player().unwrap().points(), 50);
    assert!(game.won());
}

#[test]
fn test_sprites_lists_only_placed_entities() {
    let mut game = game_from(&["P.."]);
    assert_eq!(game.sprites().count(), 3);

    game.move_player(Direction::Right).unwrap();

    assert_eq!(game.sprites().count(), 2);
}
