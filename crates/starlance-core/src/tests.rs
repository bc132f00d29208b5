#[cfg(test)]
mod tests {
    use glam::{vec2, Vec2};

    use crate::commands::UiCommand;
    use crate::constants::*;
    use crate::entity::Entity;
    use crate::enums::*;
    use crate::envelope::{envelopes_intersect, oriented_envelope};
    use crate::events::GameEvent;
    use crate::geometry::{heading_from_deg, rotate_deg, segments_intersect, Bounds};
    use crate::model::{ModelTable, SpriteModel};
    use crate::pool::EntityPool;
    use crate::state::FrameSnapshot;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    /// Unit-square entity (1×1 model, unit scale, no pivot) at a position.
    fn unit_square_at(position: Vec2) -> Entity {
        let mut e = Entity {
            position,
            ..Entity::default()
        };
        e.envelope = oriented_envelope(e.position, e.direction, e.pivot, e.scale, 1, 1);
        e
    }

    // ---- Geometry ----

    #[test]
    fn test_heading_from_deg() {
        assert!(approx(heading_from_deg(0.0), Vec2::Y));
        assert!(approx(heading_from_deg(-90.0), Vec2::X));
        assert!(approx(heading_from_deg(90.0), vec2(-1.0, 0.0)));
        assert!(approx(heading_from_deg(180.0), vec2(0.0, -1.0)));
    }

    #[test]
    fn test_rotate_deg_preserves_length() {
        let v = vec2(3.0, 4.0);
        let r = rotate_deg(v, 37.0);
        assert!((r.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            vec2(-1.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, -1.0),
            vec2(0.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1.0),
        ));
        assert!(!segments_intersect(
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(2.0, 2.0),
            vec2(3.0, 2.0),
        ));
    }

    /// Collinear touching counts as an intersection.
    #[test]
    fn test_segments_collinear_touching() {
        assert!(segments_intersect(
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 0.0),
            vec2(2.0, 0.0),
        ));
        // Overlapping collinear run.
        assert!(segments_intersect(
            vec2(0.0, 0.0),
            vec2(2.0, 0.0),
            vec2(1.0, 0.0),
            vec2(3.0, 0.0),
        ));
        // T-touch: endpoint on the interior of the other segment.
        assert!(segments_intersect(
            vec2(0.0, -1.0),
            vec2(0.0, 0.0),
            vec2(-1.0, 0.0),
            vec2(1.0, 0.0),
        ));
        // Collinear but separated.
        assert!(!segments_intersect(
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(2.0, 0.0),
            vec2(3.0, 0.0),
        ));
    }

    // ---- Envelope builder ----

    #[test]
    fn test_envelope_axis_aligned() {
        // Heading +Y: width axis is the CCW perpendicular, -X.
        let env = oriented_envelope(Vec2::ZERO, Vec2::Y, Vec2::ZERO, Vec2::ONE, 2, 3);
        assert!(approx(env[0], vec2(0.0, 0.0)));
        assert!(approx(env[1], vec2(0.0, 3.0)));
        assert!(approx(env[2], vec2(-2.0, 3.0)));
        assert!(approx(env[3], vec2(-2.0, 0.0)));
    }

    #[test]
    fn test_envelope_pivot_and_scale() {
        // pivot (1, 1) under scale (2, 1): origin shifts by
        // -right*2 - dir*1 = (2, -1) for heading +Y.
        let env = oriented_envelope(Vec2::ZERO, Vec2::Y, vec2(1.0, 1.0), vec2(2.0, 1.0), 2, 3);
        assert!(approx(env[0], vec2(2.0, -1.0)));
        assert!(approx(env[1], vec2(2.0, 2.0)));
        assert!(approx(env[2], vec2(-2.0, 2.0)));
        assert!(approx(env[3], vec2(-2.0, -1.0)));
    }

    #[test]
    fn test_envelope_deterministic() {
        let pos = vec2(3.5, -2.25);
        let dir = heading_from_deg(33.0);
        let a = oriented_envelope(pos, dir, vec2(0.5, 0.0), vec2(0.6, 0.6), 3, 4);
        let b = oriented_envelope(pos, dir, vec2(0.5, 0.0), vec2(0.6, 0.6), 3, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_envelope_rotation_preserves_extent() {
        let dir = heading_from_deg(123.0);
        let env = oriented_envelope(vec2(1.0, 1.0), dir, Vec2::ZERO, Vec2::ONE, 2, 5);
        assert!(((env[1] - env[0]).length() - 5.0).abs() < EPS);
        assert!(((env[3] - env[0]).length() - 2.0).abs() < EPS);
    }

    // ---- Collision engine ----

    #[test]
    fn test_collision_symmetry() {
        let cases = [
            (Vec2::ZERO, vec2(0.5, 0.5)),
            (Vec2::ZERO, vec2(2.5, 0.0)),
            (vec2(-1.0, 3.0), vec2(-1.2, 2.8)),
        ];
        for (pa, pb) in cases {
            let a = unit_square_at(pa);
            let b = unit_square_at(pb);
            assert_eq!(a.collides(&b), b.collides(&a), "asymmetric at {pa}/{pb}");
        }
    }

    #[test]
    fn test_collision_separated_squares() {
        let a = unit_square_at(Vec2::ZERO);
        let b = unit_square_at(vec2(2.5, 0.0));
        assert!(!envelopes_intersect(&a.envelope, &b.envelope));
    }

    #[test]
    fn test_collision_identical_position() {
        let a = unit_square_at(vec2(1.0, -4.0));
        let b = unit_square_at(vec2(1.0, -4.0));
        assert!(envelopes_intersect(&a.envelope, &b.envelope));
    }

    // ---- Entity ----

    #[test]
    fn test_entity_kind_partition() {
        let mut e = Entity::default();
        e.model_id = ID_MODEL_PLAYER;
        assert_eq!(e.kind(), EntityKind::PlayerShip);
        e.model_id = ID_MODEL_SHOT;
        assert_eq!(e.kind(), EntityKind::Shot);
        e.model_id = ENEMY_MODEL_START;
        assert_eq!(e.kind(), EntityKind::EnemyShip);
        e.model_id = ENEMY_MODEL_START + 3;
        assert_eq!(e.kind(), EntityKind::EnemyShip);
    }

    #[test]
    fn test_entity_rotate_keeps_direction_in_sync() {
        let mut e = Entity::default();
        e.set_rotation(-90.0);
        assert!(approx(e.direction, Vec2::X));
        e.rotate_by(90.0);
        assert!(approx(e.direction, Vec2::Y));
        assert!((e.rotation_deg - 0.0).abs() < EPS);
    }

    #[test]
    fn test_entity_integrate() {
        let mut e = Entity::default();
        e.set_rotation(-90.0);
        e.speed = 4.0;
        e.integrate(0.5);
        assert!(approx(e.position, vec2(2.0, 0.0)));
    }

    // ---- Pool ----

    fn pool_of(n: usize) -> EntityPool {
        let mut pool = EntityPool::with_capacity(16);
        for i in 0..n {
            let mut e = Entity::default();
            e.position = vec2(i as f32, 0.0);
            pool.append(e);
        }
        pool
    }

    #[test]
    fn test_pool_remove_middle_relocates_last() {
        let mut pool = pool_of(5);
        let removal = pool.remove(1).unwrap();
        assert_eq!(removal.relocated_from, Some(4));
        assert_eq!(pool.len(), 4);
        // The former last entity now occupies index 1.
        assert_eq!(pool.get(1).unwrap().position.x, 4.0);
        // Everything else untouched.
        assert_eq!(pool.get(0).unwrap().position.x, 0.0);
        assert_eq!(pool.get(2).unwrap().position.x, 2.0);
        assert_eq!(pool.get(3).unwrap().position.x, 3.0);
    }

    #[test]
    fn test_pool_remove_last_no_relocation() {
        let mut pool = pool_of(3);
        let removal = pool.remove(2).unwrap();
        assert_eq!(removal.relocated_from, None);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).unwrap().position.x, 0.0);
        assert_eq!(pool.get(1).unwrap().position.x, 1.0);
    }

    #[test]
    fn test_pool_remove_out_of_range() {
        let mut pool = pool_of(2);
        assert!(pool.remove(2).is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pool_append_at_capacity_is_noop() {
        let mut pool = EntityPool::with_capacity(2);
        assert!(pool.append(Entity::default()));
        assert!(pool.append(Entity::default()));
        assert!(!pool.append(Entity::default()));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pool_player_backup_restore() {
        let mut pool = pool_of(1);
        pool.snapshot_player();
        {
            let player = pool.player_mut().unwrap();
            player.position = vec2(9.0, 9.0);
            player.speed = 5.0;
        }
        assert!(pool.restore_player());
        let player = pool.player().unwrap();
        assert_eq!(player.position, vec2(0.0, 0.0));
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_pool_restore_without_backup_fails() {
        let mut pool = pool_of(1);
        assert!(!pool.restore_player());
    }

    #[test]
    fn test_pool_derived_counts() {
        let mut pool = EntityPool::with_capacity(8);
        let mut player = Entity::default();
        player.model_id = ID_MODEL_PLAYER;
        pool.append(player);

        let mut enemy = Entity::default();
        enemy.model_id = ENEMY_MODEL_START + 1;
        pool.append(enemy);
        pool.append(enemy);

        let mut shot = Entity::default();
        shot.model_id = ID_MODEL_SHOT;
        shot.owner = Some(Owner::Player);
        pool.append(shot);
        shot.owner = Some(Owner::Enemy);
        pool.append(shot);
        pool.append(shot);

        assert_eq!(pool.enemy_count(), 2);
        assert_eq!(pool.shot_count(Owner::Player), 1);
        assert_eq!(pool.shot_count(Owner::Enemy), 2);
    }

    // ---- Models ----

    #[test]
    fn test_sprite_model_from_rows() {
        let m = SpriteModel::from_rows(&[".1.", "111"]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.color_at(0, 0), None);
        assert_eq!(m.color_at(0, 1), Some(1));
        assert_eq!(m.color_at(1, 2), Some(1));
        assert_eq!(m.color_at(2, 0), None);
    }

    #[test]
    fn test_sprite_model_ragged_rows_padded() {
        let m = SpriteModel::from_rows(&["22", "2"]);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.color_at(1, 1), None);
    }

    #[test]
    fn test_model_table_standard_set() {
        let table = ModelTable::standard_set();
        assert!(table.len() > ENEMY_MODEL_START);
        assert_eq!(table.enemy_model_count(), 4);
        assert_eq!(table.dims(ID_MODEL_PLAYER), (5, 4));
        assert_eq!(table.dims(ID_MODEL_SHOT), (1, 1));
        // Unknown ids collapse to a degenerate grid.
        assert_eq!(table.dims(99), (0, 0));
    }

    // ---- Bounds ----

    #[test]
    fn test_bounds_contains_and_clamp() {
        let bounds = Bounds::from_half_extent(10.0);
        assert!(bounds.contains_with_margin(vec2(11.0, 0.0), 2.0));
        assert!(!bounds.contains_with_margin(vec2(13.0, 0.0), 2.0));

        let clamped = bounds.clamp(vec2(50.0, -50.0), 0.5);
        assert_eq!(clamped, vec2(9.5, -9.5));
    }

    #[test]
    fn test_bounds_inset() {
        let bounds = Bounds::from_half_extent(10.0).inset(2.0);
        assert_eq!(bounds.min, vec2(-8.0, -8.0));
        assert_eq!(bounds.max, vec2(8.0, 8.0));
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Menu,
            GamePhase::Help,
            GamePhase::Countdown,
            GamePhase::Playing,
            GamePhase::GameOver,
            GamePhase::Victory,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_ui_command_serde() {
        let commands = vec![
            UiCommand::MenuUp,
            UiCommand::MenuDown,
            UiCommand::MenuSelect,
            UiCommand::Cancel,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: UiCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                owner: Owner::Player,
            },
            GameEvent::EnemySpawned { model_id: 3 },
            GameEvent::EnemyDestroyed { score_awarded: 100 },
            GameEvent::PlayerHit { lives_left: 2 },
            GameEvent::Defeat,
            GameEvent::Victory,
            GameEvent::QuitRequested,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.entities.len(), 0);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_menu_item_cycle() {
        assert_eq!(MenuItem::Start.next(), MenuItem::Help);
        assert_eq!(MenuItem::Quit.next(), MenuItem::Start);
        assert_eq!(MenuItem::Start.prev(), MenuItem::Quit);
        let mut item = MenuItem::default();
        for _ in 0..3 {
            item = item.next();
        }
        assert_eq!(item, MenuItem::Start);
    }
}
