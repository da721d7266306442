use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;

use tyro_cli::{ConsolePlayer, EnginePlayer, Game, GameConfig, MoveSource};
use tyro_core::Team;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = GameConfig::from_args(std::env::args().skip(1))
        .context("usage: tyro [--depth N] [--engine white|black|none] [--save PATH]")?;
    info!(?config, "tyro starting");

    let console = Rc::new(RefCell::new(ConsolePlayer::new(
        io::stdin().lock(),
        io::stdout(),
        config.save_path.clone(),
    )));
    let player = |team: Team| -> Box<dyn MoveSource> {
        if config.engine_team == Some(team) {
            Box::new(EnginePlayer::new(config.depth))
        } else {
            Box::new(Rc::clone(&console))
        }
    };

    let mut game = Game::new(player(Team::White), player(Team::Black), io::stdout());
    let outcome = game.run()?;
    info!(%outcome, "tyro finished");
    Ok(())
}
