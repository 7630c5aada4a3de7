mod test {
    use Direction::*;
    use crate::core::*;
    use crate::engine::{step, GameChangeType, GameUpdate, MoveBlocked};
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        let expected_level = r#"
# @#
"#;
        game.assert_matches(expected_level);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        let change = game.assert_move(Right);

        let expected_level = r#"
# @$#
"#;
        game.assert_matches(expected_level);
        assert_eq!(change, GameChangeType::PlayerAndBoxMove);
    }

    #[test]
    fn when_walk_reports_player_move(){
        let mut game = GameTestState::new("#@ #");
        assert_eq!(game.assert_move(Right), GameChangeType::PlayerMove);
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
#@$$ #
"#;
        let mut game = GameTestState::new(level);
        assert_eq!(game.assert_blocked(Right), MoveBlocked::BoxIntoBox);

        let expected_level = r#"
#@$$ #
"#;
        game.assert_matches(expected_level);
        assert_eq!(game.engine.move_count(), 0);
    }

    #[test]
    fn when_block_moves_game_is_inequal(){
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.engine.state().clone();
        game.assert_move(Right);
        let new_state = game.engine.state().clone();

        let expected_level = r#"
# @$#
"#;
        game.assert_matches(expected_level);
        assert_ne!(original_state.boxes, new_state.boxes);
        assert_ne!(original_state.player, new_state.player);
    }

    #[test]
    fn when_player_moves_back_positions_are_equal(){
        let level = r#"
#@ $#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.engine.state().clone();
        game.assert_move(Right);
        game.assert_move(Left);
        let new_state = game.engine.state().clone();

        let expected_level = r#"
#@ $#
"#;
        game.assert_matches(expected_level);
        assert_eq!(original_state.player, new_state.player);
        assert_eq!(original_state.boxes, new_state.boxes);
        assert_eq!(new_state.move_count, 2);
    }

    #[test]
    fn when_blocks_swap_positions_remain_equal(){
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.engine.state().clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
#    #
# $  #
# $@ #
#    #
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);
        let new_state = game.engine.state().clone();

        let expected_level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        game.assert_matches(expected_level);

        assert_eq!(original_state.player, new_state.player);
        assert_eq!(original_state.boxes, new_state.boxes);
        assert_eq!(new_state.move_count, 20);
    }

    #[test]
    fn when_walk_into_wall_is_blocked(){
        let mut game = GameTestState::new("#@ #");
        assert_eq!(game.assert_blocked(Left), MoveBlocked::Wall);
        game.assert_matches("#@ #");
    }

    #[test]
    fn when_walk_off_grid_is_blocked(){
        let mut game = GameTestState::new("@ #");
        assert_eq!(game.assert_blocked(Left), MoveBlocked::OutOfBounds);
        assert_eq!(game.assert_blocked(Up), MoveBlocked::OutOfBounds);
        assert_eq!(game.assert_blocked(Down), MoveBlocked::OutOfBounds);
        assert_eq!(game.engine.move_count(), 0);
    }

    #[test]
    fn when_push_into_wall_nothing_changes(){
        let mut game = GameTestState::new("#@$#");
        let before = game.engine.state().clone();

        assert_eq!(game.assert_blocked(Right), MoveBlocked::BoxIntoWall);
        assert!(!game.engine.move_player(Right));

        let after = game.engine.state();
        assert_eq!(before.player, after.player);
        assert_eq!(before.boxes, after.boxes);
        assert_eq!(before.move_count, after.move_count);
    }

    #[test]
    fn when_push_off_grid_is_blocked(){
        let mut game = GameTestState::new(" @$");
        assert_eq!(game.assert_blocked(Right), MoveBlocked::BoxOutOfBounds);
        game.assert_matches(" @$");
    }

    #[test]
    fn move_count_follows_successful_moves_only(){
        let level = r#"
######
#@$  #
######
"#;
        let mut game = GameTestState::new(level);
        assert!(game.engine.move_player(Right));
        assert_eq!(game.engine.move_count(), 1);
        assert!(!game.engine.move_player(Up));
        assert_eq!(game.engine.move_count(), 1);
        assert!(game.engine.move_player(Right));
        assert_eq!(game.engine.move_count(), 2);
        assert!(!game.engine.move_player(Right));
        assert_eq!(game.engine.move_count(), 2);
        assert!(game.engine.move_player(Left));
        assert_eq!(game.engine.move_count(), 3);
    }

    #[test]
    fn vertical_push_moves_along_rows(){
        let level = r#"
#####
# . #
# $ #
# @ #
#####
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Up);
        game.assert_matches(r#"
#####
# * #
# @ #
#   #
#####
"#);
        assert!(game.engine.is_level_complete());
    }

    #[test]
    fn box_leaving_goal_restores_goal(){
        let level = r#"
#@*  #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        game.assert_matches("# +$ #");
        game.assert_move(Right);
        game.assert_matches("# .@$#");
        game.assert_move(Left);
        game.assert_matches("# + $#");
    }

    #[test]
    fn box_on_goal_render_survives_blocked_move(){
        let level = r#"
####
#@*#
####
"#;
        let mut game = GameTestState::new(level);
        let before = game.game_to_string();
        assert!(!game.engine.move_player(Right));
        let after = game.game_to_string();

        assert_eq!(before, after);
        game.assert_matches(level);
    }

    #[test]
    fn step_leaves_input_state_untouched(){
        let game = GameTestState::new("#@$ #");
        let state = game.engine.state().clone();

        let GameUpdate::NextState(next, GameChangeType::PlayerAndBoxMove) = step(&state, Right) else {
            panic!("expected a push");
        };

        assert_eq!(&state, game.engine.state());
        assert_eq!(next.player, Vec2::new(0, 2));
        assert!(next.boxes.contains(&Vec2::new(0, 3)));
        assert!(!next.boxes.contains(&Vec2::new(0, 2)));
        assert!(Direction::ALL.iter().all(|&d| d.delta() != Vec2::new(0, 0)));
    }
}
