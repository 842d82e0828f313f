use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tictactoe_timetravel::{
    args::Args,
    game::Game,
    logging::init_logging,
    ui::{SortOrder, run_ui},
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args.log_dir, &args.log_level)?;

    let mut game = Game::from_moves(&args.moves).context("failed to replay --moves")?;
    if let Some(index) = args.jump {
        game.jump_to(index).context("invalid --jump")?;
    }
    info!(
        "Loaded {} move(s), at move #{}",
        game.latest_move(),
        game.current_move()
    );

    let sort_order = if args.descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    if args.print {
        print_game(&game, sort_order);
        return Ok(());
    }

    run_ui(game, sort_order)
}

fn print_game(game: &Game, sort_order: SortOrder) {
    print!("{}", game.current_board());
    println!();
    println!("{}", game.status());
    println!();

    for entry in sort_order.apply(game.moves()) {
        println!("{:>2}. {}", entry.number, entry.description());
    }
}
