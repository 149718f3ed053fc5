//! Thin demonstration binary: wires up a [`GameStore`], plays one
//! single-player game against the built-in AI end to end, and logs the
//! outcome. The library crate (`battleship_engine`) is the actual
//! deliverable — this binary exists only to exercise it the way a real
//! transport layer eventually would.

use std::collections::HashMap;

use log::info;
use rand::SeedableRng;

use battleship_core::ship::{BaseFleet, Orientation, ShipTemplate};
use battleship_engine::config::EngineConfig;
use battleship_engine::game::{self, data::GameId, GameStore};

fn ship_catalog() -> HashMap<String, ShipTemplate> {
    [
        ShipTemplate { id: "carrier".into(), name: "Carrier".into(), size: 5 },
        ShipTemplate { id: "battleship".into(), name: "Battleship".into(), size: 4 },
        ShipTemplate { id: "cruiser".into(), name: "Cruiser".into(), size: 3 },
        ShipTemplate { id: "submarine".into(), name: "Submarine".into(), size: 3 },
        ShipTemplate { id: "destroyer".into(), name: "Destroyer".into(), size: 2 },
    ]
    .into_iter()
    .map(|t| (t.id.clone(), t))
    .collect()
}

fn standard_fleet() -> BaseFleet {
    BaseFleet {
        id: "standard".to_string(),
        board_size: 10,
        ship_template_ids: vec![
            "carrier".into(),
            "battleship".into(),
            "cruiser".into(),
            "submarine".into(),
            "destroyer".into(),
        ],
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    info!("battleship engine demo startup");

    let cfg = EngineConfig::default();
    let templates = ship_catalog();
    let fleet = standard_fleet();
    let store = GameStore::new();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let created = game::ops::create_game(
        GameId::new_v4(),
        "demo-player".to_string(),
        &fleet,
        &templates,
        game::Mode::SinglePlayer,
        &cfg,
        &mut rng,
    )
    .expect("the bundled standard fleet always fits a 10x10 board");
    let game_id = created.id;
    let handle = store.insert(created).await;

    info!("created single-player demo game {game_id}");

    // Lay the human fleet out along the top rows, left to right, with a
    // one-cell gap between ships so no two are adjacent.
    let placements: &[(&str, u32, (i32, i32), Orientation)] = &[
        ("carrier", 0, (1, 1), Orientation::Horizontal),
        ("battleship", 0, (3, 1), Orientation::Horizontal),
        ("cruiser", 0, (5, 1), Orientation::Horizontal),
        ("submarine", 0, (7, 1), Orientation::Horizontal),
        ("destroyer", 0, (9, 1), Orientation::Horizontal),
    ];

    {
        let mut game = handle.write().await;
        for &(template_id, placement_index, start, orientation) in placements {
            game::ops::place_ship(&mut game, "demo-player", template_id, placement_index, start, orientation)
                .expect("demo layout is non-overlapping and in-bounds");
        }
        info!("placed the demo fleet; game is now {}", game.state);
    }

    let mut shots_taken = 0u32;
    loop {
        let coordinate = {
            let row = 1 + (shots_taken / 10) % 10;
            let col = 1 + shots_taken % 10;
            battleship_core::coord::format(row as i32, col as i32)
        };

        let outcome = {
            let mut game = handle.write().await;
            game::ops::shoot(&mut game, "demo-player", &coordinate, &cfg, &mut rng)
        };

        shots_taken += 1;
        match outcome {
            Ok(outcome) => {
                info!(
                    "shot {} -> {:?}{}",
                    outcome.shot.coordinate,
                    outcome.shot.result,
                    if outcome.ai_shot.is_some() { " (AI replied)" } else { "" }
                );
                if outcome.game_finished {
                    info!("game over, winner: {:?}", outcome.winner_id);
                    break;
                }
            }
            Err(battleship_core::Error::AlreadyShot) => continue,
            Err(err) => {
                info!("demo loop stopped early: {err}");
                break;
            }
        }

        if shots_taken > 200 {
            info!("demo loop bailed out after 200 shots without a winner");
            break;
        }
    }

    let game = handle.read().await;
    let stats = game::ops::get_stats(&game, "demo-player").expect("demo-player is always a participant");
    info!("final stats: {stats:?}");
}
