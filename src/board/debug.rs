use super::{Game, Position};

#[cfg(debug_assertions)]
impl Game {
    /// Debug helper to print the board grid
    pub fn debug_grid(&self) {
        println!("Side to move: {}", self.side_to_move);
        if let Some(target) = self.double_step {
            println!("Double-step memo: {target}");
        }
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (1..=8).rev() {
            print!("{rank} |");
            for file in 1..=8 {
                let ch = match self.grid.get(Position::new(file, rank)) {
                    Some((color, kind)) => kind.to_char_for(color),
                    None => '.',
                };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
    }
}
