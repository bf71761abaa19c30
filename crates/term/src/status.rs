//! One-line status shown under the grid.

use std::fmt::Write as _;

use crate::core::Simulation;

/// Write `generation N  population P` into `out`, replacing its contents.
pub fn write_status(sim: &Simulation, out: &mut String) {
    out.clear();
    let _ = write!(
        out,
        "generation {}  population {}",
        sim.generation(),
        sim.population()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Simulation};

    #[test]
    fn status_reports_generation_and_population() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_cell(1, 1, true).unwrap();
        grid.set_cell(2, 1, true).unwrap();
        let mut sim = Simulation::from_grid(grid);

        let mut line = String::from("old");
        write_status(&sim, &mut line);
        assert_eq!(line, "generation 0  population 2");

        sim.step();
        write_status(&sim, &mut line);
        assert_eq!(line, "generation 1  population 0");
    }
}
