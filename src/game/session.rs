use tracing::{debug, error};

use super::command::{Command, Direction};
use super::config::GameConfig;
use super::food::{FoodSpawner, NoFreeCell};
use super::grid::{Grid, Position};
use super::snake::{PlayerSnake, PursuerSnake};

/// Screen the game is currently on; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Title,
    HowToPlay,
    Playing,
    GameOver,
    Victory,
}

/// Read-only per-frame view handed to the renderer.
///
/// Always internally consistent: the session only exposes it between ticks,
/// after all collisions have been resolved.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub mode: GameMode,
    pub grid_count: usize,
    pub player_body: &'a [Position],
    pub player_direction: Direction,
    pub pursuer_body: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub victory_threshold: u32,
}

/// Owns and orchestrates all entity state, one tick at a time
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    player: PlayerSnake,
    pursuer: PursuerSnake,
    spawner: FoodSpawner,
    food: Position,
    score: u32,
    mode: GameMode,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, NoFreeCell> {
        Self::with_spawner(config, FoodSpawner::new())
    }

    /// Session with a caller-supplied spawner, for deterministic tests
    pub fn with_spawner(config: GameConfig, spawner: FoodSpawner) -> Result<Self, NoFreeCell> {
        let grid = Grid::new(config.grid_count);
        let player = PlayerSnake::new(grid.center());
        let pursuer = PursuerSnake::new(Position::new(0, 0), config.pursuer_speed);

        let mut session = Self {
            config,
            grid,
            player,
            pursuer,
            spawner,
            food: Position::new(0, 0),
            score: 0,
            mode: GameMode::Title,
        };
        session.food = session.spawn_food()?;

        Ok(session)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply one input command. Commands that have no meaning in the current
    /// mode are silently ignored; Quit is the outer loop's concern.
    pub fn apply_command(&mut self, command: Command) -> Result<(), NoFreeCell> {
        match (self.mode, command) {
            (GameMode::Title, Command::Start) => {
                self.reset_round()?;
                self.set_mode(GameMode::Playing);
            }
            (GameMode::Title, Command::Help) => self.set_mode(GameMode::HowToPlay),
            (GameMode::HowToPlay, Command::Cancel) => self.set_mode(GameMode::Title),
            (GameMode::Playing, Command::Turn(direction)) => self.player.turn(direction),
            (GameMode::GameOver, Command::Restart) | (GameMode::Victory, Command::Restart) => {
                self.set_mode(GameMode::Title);
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance the simulation by one step.
    ///
    /// Order is load-bearing: the player moves first, then the pursuer chases
    /// the post-move head, then the catch check, then food. A tick where the
    /// player reaches food and is caught ends the round without scoring.
    pub fn tick(&mut self) -> Result<(), NoFreeCell> {
        if self.mode != GameMode::Playing {
            return Ok(());
        }

        let player_head = match self.player.advance(&self.grid) {
            Ok(head) => head,
            Err(collision) => {
                debug!(?collision, "player collision, round over");
                self.set_mode(GameMode::GameOver);
                return Ok(());
            }
        };

        if let Err(collision) = self.pursuer.advance(&self.grid, player_head) {
            debug!(?collision, "pursuer hit a wall, round over");
            self.set_mode(GameMode::GameOver);
            return Ok(());
        }

        if self.pursuer.occupies(player_head) {
            debug!("player caught by pursuer, round over");
            self.set_mode(GameMode::GameOver);
            return Ok(());
        }

        if player_head == self.food {
            self.player.mark_growth();
            self.score += 1;
            if self.score >= self.config.victory_threshold {
                self.set_mode(GameMode::Victory);
            } else {
                self.food = self.spawn_food()?;
            }
        }

        Ok(())
    }

    /// Consistent view of the world for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            mode: self.mode,
            grid_count: self.grid.count(),
            player_body: self.player.body(),
            player_direction: self.player.direction(),
            pursuer_body: self.pursuer.body(),
            food: self.food,
            score: self.score,
            victory_threshold: self.config.victory_threshold,
        }
    }

    fn reset_round(&mut self) -> Result<(), NoFreeCell> {
        self.player = PlayerSnake::new(self.grid.center());
        self.pursuer = PursuerSnake::new(Position::new(0, 0), self.config.pursuer_speed);
        self.score = 0;
        self.food = self.spawn_food()?;
        Ok(())
    }

    fn spawn_food(&mut self) -> Result<Position, NoFreeCell> {
        let occupied = self
            .player
            .body()
            .iter()
            .chain(self.pursuer.body())
            .copied();
        self.spawner.place(&self.grid, occupied).map_err(|err| {
            // Unreachable unless the snakes cover the whole grid; there is
            // no state to recover to, so the caller aborts the process.
            error!(%err, "food placement failed");
            err
        })
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "mode transition");
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session(config: GameConfig) -> GameSession {
        let mut session =
            GameSession::with_spawner(config, FoodSpawner::from_seed(99)).unwrap();
        session.apply_command(Command::Start).unwrap();
        assert_eq!(session.mode(), GameMode::Playing);
        session
    }

    /// Park the food somewhere the scenario will not touch.
    fn park_food(session: &mut GameSession) {
        session.food = Position::new(0, session.grid.count() as i32 - 1);
    }

    #[test]
    fn test_starts_on_title_screen() {
        let session = GameSession::new(GameConfig::default()).unwrap();
        assert_eq!(session.mode(), GameMode::Title);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_help_screen_round_trip() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();

        session.apply_command(Command::Help).unwrap();
        assert_eq!(session.mode(), GameMode::HowToPlay);

        // Start means nothing on the help screen.
        session.apply_command(Command::Start).unwrap();
        assert_eq!(session.mode(), GameMode::HowToPlay);

        session.apply_command(Command::Cancel).unwrap();
        assert_eq!(session.mode(), GameMode::Title);
    }

    #[test]
    fn test_ticks_outside_playing_do_nothing() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let head_before = session.player.head();

        session.tick().unwrap();
        assert_eq!(session.mode(), GameMode::Title);
        assert_eq!(session.player.head(), head_before);
    }

    #[test]
    fn test_one_tick_moves_player_right() {
        // Scenario: 30-grid, player at (15,15) facing right; one tick with
        // no turn leaves the head at (16,15) and the length at 1.
        let mut session = playing_session(GameConfig::default());
        park_food(&mut session);

        session.tick().unwrap();
        assert_eq!(session.player.head(), Position::new(16, 15));
        assert_eq!(session.player.len(), 1);
        assert_eq!(session.mode(), GameMode::Playing);
    }

    #[test]
    fn test_food_scores_then_grows_next_tick() {
        let mut session = playing_session(GameConfig::default());
        session.food = Position::new(16, 15);

        // Consuming tick: score moves, length does not yet.
        session.tick().unwrap();
        assert_eq!(session.score(), 1);
        assert_eq!(session.player.len(), 1);
        assert!(session.player.growth_pending());
        assert_ne!(session.food, Position::new(16, 15));

        // Growth lands on the following tick.
        park_food(&mut session);
        session.tick().unwrap();
        assert_eq!(session.player.len(), 2);
        assert!(!session.player.growth_pending());
    }

    #[test]
    fn test_food_never_respawns_on_a_snake() {
        let mut session = playing_session(GameConfig::small());

        for _ in 0..20 {
            session.food = session.player.head().moved_in_direction(Direction::Right);
            if !session.grid.contains(session.food) {
                break;
            }
            session.tick().unwrap();
            if session.mode() != GameMode::Playing {
                break;
            }
            assert!(!session.player.body().contains(&session.food));
            assert!(!session.pursuer.occupies(session.food));
        }
    }

    #[test]
    fn test_wall_collision_ends_round() {
        let mut session = playing_session(GameConfig::default());
        park_food(&mut session);
        session.player = PlayerSnake::new(Position::new(29, 15));

        session.tick().unwrap();
        assert_eq!(session.mode(), GameMode::GameOver);
    }

    #[test]
    fn test_victory_on_threshold_tick() {
        let mut config = GameConfig::default();
        config.victory_threshold = 3;
        let mut session = playing_session(config);

        for expected_score in 1..=2 {
            session.food = session.player.head().moved_in_direction(Direction::Right);
            session.tick().unwrap();
            assert_eq!(session.score(), expected_score);
            assert_eq!(session.mode(), GameMode::Playing);
        }

        session.food = session.player.head().moved_in_direction(Direction::Right);
        session.tick().unwrap();
        assert_eq!(session.score(), 3);
        assert_eq!(session.mode(), GameMode::Victory);
    }

    #[test]
    fn test_catch_beats_food() {
        // Pursuer at full speed one step behind the cell the player is
        // about to enter, which also holds food: the round ends and the
        // score stays put.
        let mut config = GameConfig::default();
        config.pursuer_speed = 1.0;
        let mut session = playing_session(config);

        session.player = PlayerSnake::new(Position::new(10, 10));
        session.pursuer = PursuerSnake::new(Position::new(12, 10), 1.0);
        session.food = Position::new(11, 10);

        session.tick().unwrap();
        assert_eq!(session.mode(), GameMode::GameOver);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_pursuer_closes_in_at_half_speed() {
        let mut session = playing_session(GameConfig::default());
        park_food(&mut session);
        session.player = PlayerSnake::new(Position::new(20, 15));
        session.pursuer = PursuerSnake::new(Position::new(0, 15), 0.5);

        session.tick().unwrap();
        assert_eq!(session.pursuer.head(), Position::new(0, 15));

        session.tick().unwrap();
        assert_eq!(session.pursuer.head(), Position::new(1, 15));
    }

    #[test]
    fn test_restart_goes_through_title() {
        let mut session = playing_session(GameConfig::default());
        session.player = PlayerSnake::new(Position::new(29, 15));
        session.score = 4;
        session.tick().unwrap();
        assert_eq!(session.mode(), GameMode::GameOver);

        // Restart shows the title screen first, never Playing directly.
        session.apply_command(Command::Restart).unwrap();
        assert_eq!(session.mode(), GameMode::Title);
        // Start is ignored on the game-over screen, only Restart acts.

        session.apply_command(Command::Start).unwrap();
        assert_eq!(session.mode(), GameMode::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.player.head(), Position::new(15, 15));
        assert_eq!(session.player.len(), 1);
        assert_eq!(session.pursuer.head(), Position::new(0, 0));
        assert!(!session.player.body().contains(&session.food));
        assert!(!session.pursuer.occupies(session.food));
    }

    #[test]
    fn test_start_ignored_after_game_over() {
        let mut session = playing_session(GameConfig::default());
        session.player = PlayerSnake::new(Position::new(29, 15));
        session.tick().unwrap();
        assert_eq!(session.mode(), GameMode::GameOver);

        session.apply_command(Command::Start).unwrap();
        assert_eq!(session.mode(), GameMode::GameOver);
    }

    #[test]
    fn test_turn_commands_only_apply_while_playing() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        session.apply_command(Command::Turn(Direction::Up)).unwrap();
        session.apply_command(Command::Start).unwrap();

        park_food(&mut session);
        session.tick().unwrap();
        // The pre-round turn was dropped, the player still moves right.
        assert_eq!(session.player.head(), Position::new(16, 15));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = playing_session(GameConfig::default());
        park_food(&mut session);
        session.tick().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.mode, GameMode::Playing);
        assert_eq!(snapshot.grid_count, 30);
        assert_eq!(snapshot.player_body, session.player.body());
        assert_eq!(snapshot.player_direction, Direction::Right);
        assert_eq!(snapshot.pursuer_body, session.pursuer.body());
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.victory_threshold, 10);
    }
}
