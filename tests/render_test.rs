//! Frame encoding tests - simulation snapshots through the terminal layer

use term_life::core::{Grid, Simulation};
use term_life::term::{encode_frame_into, encode_plain_into, write_status};

fn blinker() -> Simulation {
    let mut grid = Grid::new(5, 3).unwrap();
    for x in 1..4 {
        grid.set_cell(x, 1, true).unwrap();
    }
    Simulation::from_grid(grid)
}

#[test]
fn plain_frames_match_form_feed_output() {
    let mut sim = blinker();
    let mut frame = String::new();
    let mut out = Vec::new();

    sim.step();
    sim.render_into(&mut frame);
    encode_plain_into(&frame, None, &mut out);

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\x0c  *  \n  *  \n  *  \n"
    );
}

#[test]
fn terminal_frame_has_one_crlf_row_per_grid_row() {
    let sim = blinker();
    let mut out = Vec::new();
    encode_frame_into(&sim.render(), None, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("\r\n").count(), 3);
    assert!(text.contains("     \r\n *** \r\n     \r\n"));
    // No bare line feeds in raw mode.
    assert_eq!(text.matches('\n').count(), 3);
}

#[test]
fn status_line_follows_grid() {
    let mut sim = blinker();
    sim.step();
    let mut status = String::new();
    write_status(&sim, &mut status);

    let mut out = Vec::new();
    encode_frame_into(&sim.render(), Some(status.as_str()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("  *  \r\ngeneration 1  population 3\r\n"));
}
