use std::{env, path::PathBuf};

use clap::Parser;
use ggez::{
    conf::{WindowMode, WindowSetup},
    event,
    glam::vec2,
    ContextBuilder, GameError, GameResult,
};
use log::{info, LevelFilter};

use board::ArrayBoard;
use board_client::BoardClient;
use error::GraphicsError;
use input::ClickHandler;
use layout::{BoardLayout, SCREEN_HEIGHT, SCREEN_WIDTH};
use logger::Logger;

mod atlas;
mod board;
mod board_client;
mod error;
mod input;
mod layout;
mod logger;
mod render;
mod texture;

#[derive(Parser, Clone)]
pub struct Args {
    /// Minimum level of log messages to display
    #[arg(short, long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Also write logs to the given file
    #[arg(short, long)]
    pub save_logs: Option<PathBuf>,
}

/// Demo click consumer: reports which cell was clicked. A real game wires
/// its move-selection logic in here instead.
struct SquareReporter {
    layout: BoardLayout,
}

impl ClickHandler for SquareReporter {
    fn handle_click(&mut self, x: f32, y: f32) {
        match self.layout.cell_at(vec2(x, y)) {
            Some((col, row)) => info!("clicked cell ({col}, {row})"),
            None => info!("clicked outside the board at ({x}, {y})"),
        }
    }
}

fn main() -> GameResult {
    let args = Args::parse();
    let logger = Logger::new(&args)
        .map_err(|e| GameError::CustomError(format!("failed to create log file: {e}")))?;
    log::set_max_level(args.log_level);
    log::set_boxed_logger(Box::new(logger)).map_err(|e| GameError::CustomError(e.to_string()))?;

    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        PathBuf::from("./resources")
    };

    let (ctx, event_loop) = ContextBuilder::new("chess", "hacksussex")
        .window_mode(WindowMode::default().dimensions(SCREEN_WIDTH, SCREEN_HEIGHT))
        .window_setup(WindowSetup::default().title("HackSussex Chess"))
        .add_resource_path(resource_dir)
        .build()
        .map_err(|source| GraphicsError::DeviceInit { source })?;

    let layout = BoardLayout::default();
    let client = BoardClient::new(
        &ctx,
        layout,
        ArrayBoard::starting_position(),
        SquareReporter { layout },
    )?;

    event::run(ctx, event_loop, client);
}
