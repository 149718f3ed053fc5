//! `GameStore`, the top-level concurrency gate (§4.4.3/§5): an outer
//! lock guards the `GameId -> Game` map itself (inserts and deletes),
//! while each game's own `RwLock` is acquired separately so two
//! distinct games never block on each other's move.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use battleship_core::{Error, Result};

use crate::game::data::{Game, GameId};

#[derive(Default)]
pub struct GameStore {
    games: RwLock<HashMap<GameId, Arc<RwLock<Game>>>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self { games: RwLock::new(HashMap::new()) }
    }

    /// Registers a freshly created game. The outer map lock is held only
    /// long enough to insert the entry.
    pub async fn insert(&self, game: Game) -> Arc<RwLock<Game>> {
        let id = game.id;
        let handle = Arc::new(RwLock::new(game));
        self.games.write().await.insert(id, handle.clone());
        info!("registered game {id}");
        handle
    }

    /// Hands out the per-game lock handle without holding the outer map
    /// lock any longer than the lookup itself — the caller then acquires
    /// `handle.read()`/`handle.write()` independently, so two operations
    /// on two different games never contend on the same lock.
    pub async fn get(&self, id: GameId) -> Result<Arc<RwLock<Game>>> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub async fn read(&self, id: GameId) -> Result<OwnedGameRead> {
        let handle = self.get(id).await?;
        Ok(OwnedGameRead { handle })
    }

    pub async fn write(&self, id: GameId) -> Result<OwnedGameWrite> {
        let handle = self.get(id).await?;
        Ok(OwnedGameWrite { handle })
    }

    /// Removes a game from the map outright. The caller is expected to
    /// have already checked deletion permission against the game's
    /// current state (`ops::can_delete`) while holding a write lock on
    /// it.
    pub async fn remove(&self, id: GameId) -> Result<()> {
        self.games
            .write()
            .await
            .remove(&id)
            .map(|_| {
                info!("removed game {id}");
            })
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// A borrowed read guard over one game, obtained via [`GameStore::read`].
/// Exists only so callers don't have to juggle the `Arc` themselves.
pub struct OwnedGameRead {
    handle: Arc<RwLock<Game>>,
}

impl OwnedGameRead {
    pub async fn lock(&self) -> RwLockReadGuard<'_, Game> {
        self.handle.read().await
    }
}

pub struct OwnedGameWrite {
    handle: Arc<RwLock<Game>>,
}

impl OwnedGameWrite {
    pub async fn lock(&self) -> RwLockWriteGuard<'_, Game> {
        self.handle.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::data::Mode;
    use std::collections::HashMap as StdHashMap;

    fn dummy_game(id: GameId) -> Game {
        Game {
            id,
            board_size: 10,
            base_fleet_id: "standard".to_string(),
            mode: Mode::SinglePlayer,
            player1_id: "alice".to_string(),
            player2_id: None,
            state: crate::game::data::GameState::WaitingForPlacement,
            turn_passes_on_hit: false,
            required_ships: StdHashMap::new(),
            next_unplaced: StdHashMap::new(),
            boards: StdHashMap::new(),
            fleets: StdHashMap::new(),
            shots_history: Vec::new(),
            next_shot_index: 0,
            winner: None,
            created_at: chrono::Utc::now(),
            started_at: None,
            finished_at: None,
            ai_state: None,
            min_ship_size: 2,
        }
    }

    #[tokio::test]
    async fn insert_then_get_returns_the_same_handle() {
        let store = GameStore::new();
        let id = GameId::new_v4();
        store.insert(dummy_game(id)).await;

        assert_eq!(store.len().await, 1);
        let handle = store.get(id).await.unwrap();
        assert_eq!(handle.read().await.player1_id, "alice");
    }

    #[tokio::test]
    async fn get_on_an_unknown_id_is_not_found() {
        let store = GameStore::new();
        let result = store.get(GameId::new_v4()).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_drops_the_entry() {
        let store = GameStore::new();
        let id = GameId::new_v4();
        store.insert(dummy_game(id)).await;
        store.remove(id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(store.get(id).await.is_err());
    }

    #[tokio::test]
    async fn two_distinct_games_do_not_block_each_other() {
        let store = Arc::new(GameStore::new());
        let id_a = GameId::new_v4();
        let id_b = GameId::new_v4();
        store.insert(dummy_game(id_a)).await;
        store.insert(dummy_game(id_b)).await;

        let handle_a = store.get(id_a).await.unwrap();
        let guard_a = handle_a.write().await;

        // A write lock on game A must not prevent a concurrent read of
        // game B: this would deadlock if both shared one lock.
        let handle_b = store.get(id_b).await.unwrap();
        let guard_b = handle_b.read().await;
        assert_eq!(guard_b.player1_id, "alice");
        drop(guard_a);
    }
}
