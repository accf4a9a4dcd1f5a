//! Game construction.
//!
//! [`GameBuilder`] validates the player list, lays out any pre-built
//! structures, assigns powers and places actors, then hands a ready board to
//! [`Game`]. Anything left unspecified (powers, placement) is drawn from a
//! [`GameRng`] seeded from the config, so the same builder input always
//! yields the same game.

use super::game::Game;
use crate::board::Board;
use crate::core::{Actor, ActorId, Cell, GameConfig, GameRng, Player, PlayerId, PlayerMap, SetupError};
use crate::events::GameObserver;
use crate::powers::PowerKind;
use crate::structures::Structure;

/// Number of players the rules support.
pub const PLAYER_COUNT: usize = 2;

/// Builder for creating a [`Game`].
///
/// ```
/// use santorini_engine::events::NullObserver;
/// use santorini_engine::powers::PowerKind;
/// use santorini_engine::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("Robby")
///     .player_with_power("Miguel", PowerKind::ExtraBuild)
///     .seed(7)
///     .build(NullObserver)
///     .unwrap();
///
/// assert_eq!(game.board().occupancy().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    players: Vec<(String, Option<PowerKind>)>,
    placements: Option<Vec<Cell>>,
    layout: Vec<(Cell, Structure)>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed for random setup.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Add a player whose power is drawn at random.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push((name.into(), None));
        self
    }

    /// Add a player with a fixed power.
    pub fn player_with_power(mut self, name: impl Into<String>, power: PowerKind) -> Self {
        self.players.push((name.into(), Some(power)));
        self
    }

    /// Fix actor placement: player one's actors first, in roster order.
    pub fn placements(mut self, cells: Vec<Cell>) -> Self {
        self.placements = Some(cells);
        self
    }

    /// Start the game with `structure` already standing on `cell`.
    pub fn structure(mut self, cell: Cell, structure: Structure) -> Self {
        self.layout.push((cell, structure));
        self
    }

    /// Validate and build the game, reporting to `observer`.
    pub fn build<O: GameObserver>(self, observer: O) -> Result<Game<O>, SetupError> {
        let config = self.config;
        if self.players.len() != PLAYER_COUNT {
            return Err(SetupError::PlayerCount(self.players.len()));
        }
        if config.dimension < 2 {
            return Err(SetupError::DimensionTooSmall(config.dimension));
        }
        if config.actors_per_player == 0 {
            return Err(SetupError::NoActors);
        }

        let mut board = Board::new(config.dimension);
        for &(cell, structure) in &self.layout {
            if !board.contains(cell) {
                return Err(SetupError::StructureOutOfBounds(cell));
            }
            if !structure.is_valid() {
                return Err(SetupError::InvalidStructure(cell, structure));
            }
            board.set_structure(cell, structure);
        }

        let needed = self.players.len() * config.actors_per_player;
        let available = board.cells().filter(|&c| !is_blocked(&board, c)).count();
        if needed > available {
            return Err(SetupError::NotEnoughCells { needed, available });
        }

        let mut rng = GameRng::new(config.seed);
        let powers = assign_powers(&self.players, &mut rng)?;

        let cells = match self.placements {
            Some(cells) => check_placements(&board, cells, needed)?,
            None => random_placements(&board, needed, &mut rng),
        };

        let mut actors = Vec::with_capacity(needed);
        let mut players = Vec::with_capacity(self.players.len());
        let mut cells = cells.into_iter();

        for (index, ((name, _), power)) in self.players.into_iter().zip(powers).enumerate() {
            let owner = PlayerId::new(index as u8);
            let mut roster = Vec::with_capacity(config.actors_per_player);

            for (slot, cell) in cells.by_ref().take(config.actors_per_player).enumerate() {
                let actor = Actor::new(ActorId::new(actors.len() as u32), owner, slot as u8);
                board.place(actor.id, cell);
                tracing::debug!(actor = %actor.label(), cell = %cell, "actor placed");
                roster.push(actor.id);
                actors.push(actor);
            }

            tracing::debug!(player = %owner, player_name = %name, power = %power, "player ready");
            players.push(Player::new(owner, name, roster, power.instantiate()));
        }

        tracing::info!(
            dimension = config.dimension,
            seed = config.seed,
            "game created"
        );
        Ok(Game::new(config, board, PlayerMap::from_vec(players), actors, observer))
    }
}

/// Fill in missing powers. Special powers are never shared.
fn assign_powers(
    players: &[(String, Option<PowerKind>)],
    rng: &mut GameRng,
) -> Result<Vec<PowerKind>, SetupError> {
    let mut taken: Vec<PowerKind> = Vec::new();
    for power in players.iter().filter_map(|(_, p)| *p) {
        if power != PowerKind::Standard && taken.contains(&power) {
            return Err(SetupError::DuplicatePower(power));
        }
        taken.push(power);
    }

    let mut pool: Vec<PowerKind> = PowerKind::SPECIAL
        .into_iter()
        .filter(|p| !taken.contains(p))
        .collect();

    players
        .iter()
        .map(|(_, explicit)| match explicit {
            Some(power) => Ok(*power),
            None if pool.is_empty() => Err(SetupError::PowersExhausted),
            None => Ok(pool.remove(rng.gen_range_usize(0..pool.len()))),
        })
        .collect()
}

fn check_placements(board: &Board, cells: Vec<Cell>, needed: usize) -> Result<Vec<Cell>, SetupError> {
    if cells.len() != needed {
        return Err(SetupError::PlacementCount {
            expected: needed,
            got: cells.len(),
        });
    }
    for (i, &cell) in cells.iter().enumerate() {
        if !board.contains(cell) {
            return Err(SetupError::PlacementOutOfBounds(cell));
        }
        if cells[..i].contains(&cell) {
            return Err(SetupError::PlacementOccupied(cell));
        }
        if is_blocked(board, cell) {
            return Err(SetupError::PlacementBlocked(cell));
        }
    }
    Ok(cells)
}

/// Actors never start on a wall or a dome.
fn is_blocked(board: &Board, cell: Cell) -> bool {
    matches!(board.structure_at(cell), Structure::Wall { .. } | Structure::Dome)
}

fn random_placements(board: &Board, needed: usize, rng: &mut GameRng) -> Vec<Cell> {
    let mut cells: Vec<Cell> = board.cells().filter(|&c| !is_blocked(board, c)).collect();
    rng.shuffle(&mut cells);
    cells.truncate(needed);
    cells
}
