//! Render model serialization tests - the JSON contract a front end consumes

use blockfall::{Command, GameState};

#[test]
fn render_model_serializes_with_full_schema() {
    let mut game = GameState::new(1);
    let model = game.step(16, &[]);

    let v = serde_json::to_value(model).unwrap();

    // Board is 20 rows of 10 palette entries
    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    for row in board {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 10);
        for cell in row {
            let cell = cell.as_u64().unwrap();
            assert!(cell <= 7);
        }
    }

    // Both piece views carry four cells and a palette color
    for key in ["current", "next"] {
        let cells = v[key]["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 4);
        for cell in cells {
            assert_eq!(cell.as_array().unwrap().len(), 2);
        }
        let color = v[key]["color"].as_u64().unwrap();
        assert!((1..=7).contains(&color));
    }

    assert_eq!(v["score"], 0);
    assert_eq!(v["level"], 1);
    assert_eq!(v["game_over"], false);
}

#[test]
fn next_preview_stays_in_shape_local_coordinates() {
    let mut game = GameState::new(99);
    let model = game.step(0, &[]);

    let v = serde_json::to_value(model).unwrap();
    for cell in v["next"]["cells"].as_array().unwrap() {
        let pair = cell.as_array().unwrap();
        let x = pair[0].as_i64().unwrap();
        let y = pair[1].as_i64().unwrap();
        assert!((0..4).contains(&x), "preview x within shape box");
        assert!((0..4).contains(&y), "preview y within shape box");
    }
}

#[test]
fn serialized_fields_track_session_progress() {
    let mut game = GameState::new(7);

    // Rack up drop points and end the session by stacking the center
    let mut guard = 0;
    while !game.game_over() {
        game.step(0, &[Command::HardDrop]);
        guard += 1;
        assert!(guard < 200);
    }

    let v = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(v["game_over"], true);
    assert_eq!(v["score"].as_u64().unwrap(), game.score() as u64);
    assert_eq!(v["level"].as_u64().unwrap(), game.level() as u64);
    assert!(v["score"].as_u64().unwrap() > 0);
}
