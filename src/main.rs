use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use torsnek::game::{Game, Tick};
use torsnek::input::{self, Command};
use torsnek::screen::Screen;

/// Wall-clock length of one simulation tick.
const TICK: Duration = Duration::from_millis(120);
/// How long the game-over and level-clear banners stay up.
const ROUND_PAUSE: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let mut screen = Screen::open()?;
    let mut game = Game::new();
    screen.draw_round(&game)?;

    loop {
        let tick_started = Instant::now();

        match input::poll_command()? {
            Some(Command::Quit) => break,
            Some(Command::Steer(dir)) => game.steer(dir),
            Some(Command::NextLevel) => {
                game.switch_level(1);
                screen.draw_round(&game)?;
            }
            Some(Command::PrevLevel) => {
                game.switch_level(-1);
                screen.draw_round(&game)?;
            }
            None => {}
        }

        match game.advance() {
            Tick::Step(step) => screen.draw_step(&game, &step)?,
            Tick::GameOver => {
                screen.draw_game_over()?;
                thread::sleep(ROUND_PAUSE);
                game.start_round();
                screen.draw_round(&game)?;
            }
            Tick::LevelClear => {
                screen.draw_level_clear()?;
                thread::sleep(ROUND_PAUSE);
                game.start_round();
                screen.draw_round(&game)?;
            }
        }

        thread::sleep(TICK.saturating_sub(tick_started.elapsed()));
    }

    Ok(())
}
