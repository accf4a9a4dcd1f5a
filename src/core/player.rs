//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Index 0 is the first player to act.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//! Entries survive resignation: a resigned player keeps its slot, it is only
//! removed from the rotation.
//!
//! ## Player
//!
//! Name, roster of actors, assigned power, and the turn-in-progress flag.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::actor::ActorId;
use crate::powers::{Power, PowerKind};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)` and is
/// displayed as `P1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use santorini_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use santorini_engine::core::{PlayerId, PlayerMap};
///
/// let mut clocks = PlayerMap::with_value(2, Duration::from_secs(300));
/// clocks[PlayerId::new(1)] -= Duration::from_secs(1);
/// assert_eq!(clocks[PlayerId::new(1)], Duration::from_secs(299));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Build a PlayerMap from values already in player order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// A participant in the game.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    actors: SmallVec<[ActorId; 2]>,
    power: Box<dyn Power>,
    turn_in_progress: bool,
}

impl Player {
    /// Create a player with its roster and power.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        actors: impl IntoIterator<Item = ActorId>,
        power: Box<dyn Power>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            actors: actors.into_iter().collect(),
            power,
            turn_in_progress: false,
        }
    }

    /// Player identifier.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Actors controlled by this player, in roster order.
    #[must_use]
    pub fn actors(&self) -> &[ActorId] {
        &self.actors
    }

    /// Check whether this player controls `actor`.
    #[must_use]
    pub fn owns(&self, actor: ActorId) -> bool {
        self.actors.contains(&actor)
    }

    /// The power strategy assigned at setup.
    #[must_use]
    pub fn power(&self) -> &dyn Power {
        self.power.as_ref()
    }

    /// Shorthand for `power().kind()`.
    #[must_use]
    pub fn power_kind(&self) -> PowerKind {
        self.power.kind()
    }

    /// True between selecting an actor and finishing the turn.
    #[must_use]
    pub fn is_turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    /// Set the turn-in-progress flag.
    pub fn set_turn_in_progress(&mut self, in_progress: bool) {
        self.turn_in_progress = in_progress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "P1");
        assert_eq!(format!("{}", p1), "P2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map.player_count(), 2);
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::with_value(2, 7);

        assert_eq!(map.get(PlayerId::new(1)), Some(&7));
        assert_eq!(map.get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i32> = PlayerMap::from_vec(vec![1, 2]);
        map[PlayerId::new(0)] = 10;
        if let Some(v) = map.get_mut(PlayerId::new(1)) {
            *v += 1;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &10), (PlayerId::new(1), &3)]);
        assert_eq!(map.player_ids().count(), 2);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_player_roster_and_flag() {
        let mut player = Player::new(
            PlayerId::new(0),
            "Robby",
            [ActorId(0), ActorId(1)],
            PowerKind::ExtraBuild.instantiate(),
        );

        assert_eq!(player.name(), "Robby");
        assert!(player.owns(ActorId(1)));
        assert!(!player.owns(ActorId(2)));
        assert_eq!(player.power_kind(), PowerKind::ExtraBuild);

        assert!(!player.is_turn_in_progress());
        player.set_turn_in_progress(true);
        assert!(player.is_turn_in_progress());
    }
}
