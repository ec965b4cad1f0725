//! Derived board geometry.
//!
//! Every variant is laid out on a size x size grid where only some
//! intersections are playable. Validity, adjacency and mill lines are
//! all derived from the grid shape rather than hard-coded per variant,
//! so the same rules produce the three, six and nine piece boards.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::game_type::GameType;
use super::location::BoardLocation;

pub(super) struct BoardGeometry {
    pub(super) locations: Vec<BoardLocation>,
    pub(super) adjacency: FxHashMap<BoardLocation, SmallVec<[BoardLocation; 4]>>,
    pub(super) mills: Vec<[BoardLocation; 3]>,
    pub(super) mills_at: FxHashMap<BoardLocation, SmallVec<[usize; 2]>>,
}

static GEOMETRIES: Lazy<[BoardGeometry; 3]> = Lazy::new(|| {
    [
        BoardGeometry::build(GameType::ThreeMensMorris),
        BoardGeometry::build(GameType::SixMensMorris),
        BoardGeometry::build(GameType::NineMensMorris),
    ]
});

pub(super) fn for_game_type(game_type: GameType) -> &'static BoardGeometry {
    match game_type {
        GameType::ThreeMensMorris => &GEOMETRIES[0],
        GameType::SixMensMorris => &GEOMETRIES[1],
        GameType::NineMensMorris => &GEOMETRIES[2],
    }
}

/// A grid point is playable if it sits on one of the concentric square
/// rings or on a cross arm connecting them. Folding the grid onto its
/// upper left quadrant reduces the check to the diagonal plus the
/// middle line and column, with the board center always excluded. The
/// smallest board is fully connected and every point is playable.
pub(super) fn is_valid_location(game_type: GameType, location: BoardLocation) -> bool {
    let size = game_type.board_size();
    if location.line() >= size || location.column() >= size {
        return false;
    }
    if size == 3 {
        return true;
    }
    let middle = size / 2;
    let mut line = location.line();
    let mut column = location.column();
    if line == middle {
        return column != middle;
    }
    if line > middle {
        line = size - line - 1;
    }
    if column == middle {
        return true;
    }
    if column > middle {
        column = size - column - 1;
    }
    line == column
}

/// Walks from `from` one grid cell at a time and returns the first
/// playable location, if any. Connection lines never run through the
/// empty board center, so the walk stops there.
fn neighbor_in_direction(
    game_type: GameType,
    from: BoardLocation,
    delta_line: i16,
    delta_column: i16,
) -> Option<BoardLocation> {
    let size = game_type.board_size() as i16;
    let middle = size / 2;
    let mut line = from.line() as i16 + delta_line;
    let mut column = from.column() as i16 + delta_column;
    while (0..size).contains(&line) && (0..size).contains(&column) {
        if size > 3 && line == middle && column == middle {
            return None;
        }
        let candidate = BoardLocation::new(line as u8, column as u8);
        if is_valid_location(game_type, candidate) {
            return Some(candidate);
        }
        line += delta_line;
        column += delta_column;
    }
    None
}

impl BoardGeometry {
    fn build(game_type: GameType) -> Self {
        let size = game_type.board_size();

        let mut locations = Vec::new();
        for line in 0..size {
            for column in 0..size {
                let location = BoardLocation::new(line, column);
                if is_valid_location(game_type, location) {
                    locations.push(location);
                }
            }
        }

        let mut adjacency: FxHashMap<BoardLocation, SmallVec<[BoardLocation; 4]>> =
            FxHashMap::default();
        for &location in &locations {
            let mut neighbors = SmallVec::new();
            for &(delta_line, delta_column) in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(neighbor) =
                    neighbor_in_direction(game_type, location, delta_line, delta_column)
                {
                    neighbors.push(neighbor);
                }
            }
            adjacency.insert(location, neighbors);
        }

        let mut mills = Vec::new();
        for fixed in 0..size {
            let line_locations: Vec<BoardLocation> = (0..size)
                .map(|column| BoardLocation::new(fixed, column))
                .filter(|&location| is_valid_location(game_type, location))
                .collect();
            collect_mills(&adjacency, &line_locations, &mut mills);

            let column_locations: Vec<BoardLocation> = (0..size)
                .map(|line| BoardLocation::new(line, fixed))
                .filter(|&location| is_valid_location(game_type, location))
                .collect();
            collect_mills(&adjacency, &column_locations, &mut mills);
        }

        let mut mills_at: FxHashMap<BoardLocation, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (index, mill) in mills.iter().enumerate() {
            for &location in mill {
                mills_at.entry(location).or_default().push(index);
            }
        }

        Self {
            locations,
            adjacency,
            mills,
            mills_at,
        }
    }
}

/// Splits one grid line or column into runs of mutually adjacent
/// playable locations. Every run of exactly three is a mill; the
/// center gap keeps the two halves of a middle line apart.
fn collect_mills(
    adjacency: &FxHashMap<BoardLocation, SmallVec<[BoardLocation; 4]>>,
    ordered: &[BoardLocation],
    mills: &mut Vec<[BoardLocation; 3]>,
) {
    let mut run: Vec<BoardLocation> = Vec::new();
    for &location in ordered {
        let connected = run
            .last()
            .map_or(true, |last| adjacency[last].contains(&location));
        if !connected {
            flush_run(&run, mills);
            run.clear();
        }
        run.push(location);
    }
    flush_run(&run, mills);
}

fn flush_run(run: &[BoardLocation], mills: &mut Vec<[BoardLocation; 3]>) {
    if let &[a, b, c] = run {
        mills.push([a, b, c]);
    }
}
