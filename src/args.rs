use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Tic-tac-toe with a time-travelling move list")]
pub struct Args {
    /// Cells (0-8, row-major) to replay before starting
    #[arg(long, num_args = 1.., value_name = "CELL")]
    pub moves: Vec<usize>,

    /// Jump to this move number after replaying
    #[arg(long, value_name = "N")]
    pub jump: Option<usize>,

    /// Show the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Print the board, status and move list instead of starting the UI
    #[arg(long)]
    pub print: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tictactoe"]);
        assert!(args.moves.is_empty());
        assert_eq!(args.jump, None);
        assert!(!args.descending);
        assert!(!args.print);
        assert_eq!(args.log_dir, PathBuf::from("logs"));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_moves_and_jump() {
        let args = Args::parse_from([
            "tictactoe", "--moves", "0", "4", "1", "--jump", "2", "--print",
        ]);
        assert_eq!(args.moves, vec![0, 4, 1]);
        assert_eq!(args.jump, Some(2));
        assert!(args.print);
    }

    #[test]
    fn test_rejects_non_numeric_cell() {
        assert!(Args::try_parse_from(["tictactoe", "--moves", "a"]).is_err());
    }
}
