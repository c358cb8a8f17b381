//! Suicide checkers
//!
//! Play against the AI in a desktop window or on the terminal.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use suicide_checkers::console::Console;
use suicide_checkers::search::DEPTH_LIMIT;
use suicide_checkers::ui::{CheckersApp, GameMode};
use suicide_checkers::{Player, SearchConfig, TieBreak};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeOpt {
    Gui,
    Console,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HumanOpt {
    Black,
    White,
    /// AI vs AI on the console, hotseat in the GUI
    None,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakOpt {
    First,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "suicide-checkers", about = "6x6 suicide checkers against an alpha-beta AI")]
struct Args {
    /// Front end: gui | console
    #[arg(long, value_enum, default_value_t = ModeOpt::Gui)]
    mode: ModeOpt,

    /// Side played by the human: black | white | none
    #[arg(long, value_enum, default_value_t = HumanOpt::Black)]
    human: HumanOpt,

    /// Search depth in plies
    #[arg(long, default_value_t = DEPTH_LIMIT)]
    depth: u8,

    /// How the AI picks among equally good moves: first | random
    #[arg(long, value_enum, default_value_t = TieBreakOpt::First)]
    tie_break: TieBreakOpt,

    /// Seed for --tie-break random (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn human(&self) -> Option<Player> {
        match self.human {
            HumanOpt::Black => Some(Player::Black),
            HumanOpt::White => Some(Player::White),
            HumanOpt::None => None,
        }
    }

    fn search_config(&self) -> SearchConfig {
        let tie_break = match self.tie_break {
            TieBreakOpt::First => TieBreak::FirstFound,
            TieBreakOpt::Random => TieBreak::Random,
        };
        SearchConfig {
            depth_limit: self.depth,
            tie_break,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.search_config();
    info!(?args, "starting");

    match args.mode {
        ModeOpt::Console => {
            let stdin = std::io::stdin();
            let mut console = Console::new(stdin.lock(), std::io::stdout(), args.human(), config);
            console.run()?;
            Ok(())
        }
        ModeOpt::Gui => {
            let mode = match args.human() {
                Some(human) => GameMode::PvE { human },
                None => GameMode::PvP,
            };
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([960.0, 700.0])
                    .with_min_inner_size([760.0, 560.0])
                    .with_title("Suicide Checkers"),
                ..Default::default()
            };

            eframe::run_native(
                "Suicide Checkers",
                options,
                Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, mode, config)))),
            )?;
            Ok(())
        }
    }
}
