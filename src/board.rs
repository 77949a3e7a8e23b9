use rand::Rng;

pub const ROWS: u16 = 17;
pub const COLS: u16 = 25;
pub const CELLS: usize = ROWS as usize * COLS as usize;

/// Slot value pinned to obstacle cells. It sits one past every valid index,
/// so the `slot < free` openness test stays false no matter how far the
/// free region grows.
const PINNED: usize = CELLS;

/// One grid position. The playfield wraps on both axes, so every cell has
/// four neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    pub fn new(row: u16, col: u16) -> Cell {
        debug_assert!(row < ROWS && col < COLS);
        Cell { row, col }
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * COLS as usize + self.col as usize
    }
}

/// Occupancy index over the whole grid: which cells are open, which are
/// walls, and where the snake's body runs, with O(1) collision tests, O(1)
/// head and tail updates, and O(1) uniform sampling of open cells.
///
/// `cell_at` and `slot_of` are mutually inverse maps between cells and
/// slots. Slots below `free` hold the open cells, packed so a random slot in
/// that range is a random open cell. Each body cell owns one slot at or
/// above `free`, and the `cell_at` entry of that slot doubles as a chain
/// link: it names the next segment toward the head, except for the head
/// itself, whose slot names the current tail. Advancing the head claims the
/// boundary slot of the open region; releasing the tail hands the tail's
/// cell back to the boundary. Obstacles take no part in any of this beyond
/// their pinned `slot_of` entry.
pub struct Board {
    cell_at: [Cell; CELLS],
    slot_of: [usize; CELLS],
    free: usize,
    blocked: usize,
}

impl Board {
    pub fn new() -> Board {
        Board {
            cell_at: [Cell { row: 0, col: 0 }; CELLS],
            slot_of: [PINNED; CELLS],
            free: 0,
            blocked: CELLS,
        }
    }

    /// Rebuilds the whole index for a new round: obstacle cells are pinned,
    /// every other cell joins the open set in row-major order.
    pub fn reset(&mut self, blocked: impl Fn(Cell) -> bool) {
        self.free = 0;
        self.blocked = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = Cell::new(row, col);
                if blocked(cell) {
                    self.slot_of[cell.index()] = PINNED;
                    self.blocked += 1;
                } else {
                    self.slot_of[cell.index()] = self.free;
                    self.cell_at[self.free] = cell;
                    self.free += 1;
                }
            }
        }
    }

    /// Establishes a one-cell body on a freshly reset board. The first
    /// segment cannot go through [`Board::advance_head`], whose old head and
    /// candidate would alias.
    pub fn seed(&mut self, cell: Cell) {
        assert!(self.is_open(cell), "seed cell is not open");
        let boundary = self.free - 1;
        let displaced = self.cell_at[boundary];
        let vacated = self.slot_of[cell.index()];

        self.cell_at[vacated] = displaced;
        self.slot_of[displaced.index()] = vacated;

        // A one-cell body chains to itself: head and tail are the same cell.
        self.cell_at[boundary] = cell;
        self.slot_of[cell.index()] = boundary;
        self.free = boundary;
    }

    /// Tries to move the head onto `next`. `head` and `tail` are the
    /// segments before the move. Returns `false` without touching anything
    /// when `next` is a wall or body cell; that is the game-over signal, not
    /// an error.
    pub fn advance_head(&mut self, head: Cell, tail: Cell, next: Cell) -> bool {
        let vacated = self.slot_of[next.index()];
        if vacated >= self.free {
            return false;
        }
        let boundary = self.free - 1;
        let displaced = self.cell_at[boundary];

        // Keep the open region packed: the boundary cell takes over the
        // slot the new head leaves behind.
        self.cell_at[vacated] = displaced;
        self.slot_of[displaced.index()] = vacated;

        // The claimed slot stores the tail, which is the link the next
        // tail release consumes, and the old head's slot now points at the
        // new head, extending the chain.
        self.cell_at[boundary] = tail;
        self.cell_at[self.slot_of[head.index()]] = next;

        self.slot_of[next.index()] = boundary;
        self.free = boundary;
        true
    }

    /// Returns the tail's cell to the open set and reports the next segment,
    /// which becomes the new tail. Call at most once per successful
    /// [`Board::advance_head`], with the post-move head and a body of at
    /// least two cells.
    pub fn release_tail(&mut self, head: Cell, tail: Cell) -> Cell {
        debug_assert!(head != tail, "cannot shrink a one-cell body");
        debug_assert_eq!(self.cell_at[self.free], tail, "tail link out of step");

        let vacated = self.slot_of[tail.index()];
        self.slot_of[head.index()] = vacated;
        self.slot_of[tail.index()] = self.free;
        self.free += 1;
        self.cell_at[vacated]
    }

    /// Uniform draw from the open cells; `None` means the grid is full and
    /// the level is cleared.
    pub fn random_open(&self, rng: &mut impl Rng) -> Option<Cell> {
        if self.free == 0 {
            None
        } else {
            Some(self.cell_at[rng.gen_range(0..self.free)])
        }
    }

    /// One chain step toward the head. Meaningful for body cells only.
    pub fn next_segment(&self, cell: Cell) -> Cell {
        debug_assert!(!self.is_open(cell) && !self.is_blocked(cell));
        self.cell_at[self.slot_of[cell.index()]]
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.slot_of[cell.index()] < self.free
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.slot_of[cell.index()] == PINNED
    }

    pub fn free_cells(&self) -> usize {
        self.free
    }

    pub fn blocked_cells(&self) -> usize {
        self.blocked
    }

    /// Body length is never stored; it is whatever the other two partitions
    /// leave over.
    pub fn body_len(&self) -> usize {
        CELLS - self.blocked - self.free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn open_board() -> Board {
        let mut board = Board::new();
        board.reset(|_| false);
        board
    }

    /// Seeds the standard three-cell starting body on row 8 and returns
    /// (board, head, tail).
    fn three_cell_board() -> (Board, Cell, Cell) {
        let mut board = open_board();
        let tail = Cell::new(8, 8);
        board.seed(tail);
        let mut head = tail;
        for col in 9..=10 {
            let next = Cell::new(8, col);
            assert!(board.advance_head(head, tail, next));
            head = next;
        }
        (board, head, tail)
    }

    #[test]
    fn reset_partitions_every_cell() {
        let board = open_board();
        assert_eq!(board.free_cells(), CELLS);
        assert_eq!(board.blocked_cells(), 0);
        assert_eq!(board.body_len(), 0);

        let mut walled = Board::new();
        walled.reset(|cell| cell.row < 2);
        assert_eq!(walled.blocked_cells(), 2 * COLS as usize);
        assert_eq!(walled.free_cells(), CELLS - 2 * COLS as usize);
        assert!(walled.is_blocked(Cell::new(0, 3)));
        assert!(walled.is_open(Cell::new(2, 3)));
    }

    #[test]
    fn seeding_and_growing_build_the_chain() {
        let (board, head, tail) = three_cell_board();
        assert_eq!(board.body_len(), 3);
        assert_eq!(board.free_cells(), CELLS - 3);

        assert_eq!(board.next_segment(tail), Cell::new(8, 9));
        assert_eq!(board.next_segment(Cell::new(8, 9)), head);
        // The head's slot closes the loop back to the tail.
        assert_eq!(board.next_segment(head), tail);
    }

    #[test]
    fn advancing_into_the_body_is_rejected_without_mutation() {
        let (mut board, head, tail) = three_cell_board();
        let free_before = board.free_cells();

        assert!(!board.advance_head(head, tail, Cell::new(8, 9)));
        assert!(!board.advance_head(head, tail, tail));
        assert_eq!(board.free_cells(), free_before);
        assert_eq!(board.body_len(), 3);
    }

    #[test]
    fn advancing_into_a_wall_is_rejected() {
        let mut board = Board::new();
        board.reset(|cell| cell == Cell::new(8, 9));
        board.seed(Cell::new(8, 8));

        let seed = Cell::new(8, 8);
        assert!(!board.advance_head(seed, seed, Cell::new(8, 9)));
        assert!(board.advance_head(seed, seed, Cell::new(7, 8)));
    }

    #[test]
    fn releasing_the_tail_returns_the_second_segment() {
        let (mut board, head, tail) = three_cell_board();

        let new_tail = board.release_tail(head, tail);
        assert_eq!(new_tail, Cell::new(8, 9));
        assert!(board.is_open(tail));
        assert_eq!(board.body_len(), 2);
        assert_eq!(board.free_cells(), CELLS - 2);
    }

    #[test]
    fn growth_and_shrink_keep_the_partition_balanced() {
        let (mut board, mut head, mut tail) = three_cell_board();

        // Eating tick: head advances, tail stays.
        let next = Cell::new(8, 11);
        assert!(board.advance_head(head, tail, next));
        head = next;
        assert_eq!(board.body_len(), 4);

        // Plain tick: head advances and the tail is released.
        let next = Cell::new(8, 12);
        assert!(board.advance_head(head, tail, next));
        head = next;
        tail = board.release_tail(head, tail);
        assert_eq!(tail, Cell::new(8, 9));
        assert_eq!(board.body_len(), 4);
        assert_eq!(board.free_cells() + board.body_len(), CELLS);
    }

    #[test]
    fn claiming_every_cell_exhausts_the_open_set() {
        let (mut board, mut head, tail) = three_cell_board();
        let mut rng = StdRng::seed_from_u64(11);

        // 421 further claims leave exactly one open cell; the 422nd leaves
        // none and food placement reports the cleared level.
        let mut claimed = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                let next = Cell::new(row, col);
                if !board.is_open(next) {
                    continue;
                }
                assert!(board.advance_head(head, tail, next));
                head = next;
                claimed += 1;
                if claimed == 421 {
                    assert_eq!(board.free_cells(), 1);
                    assert!(board.random_open(&mut rng).is_some());
                }
            }
        }
        assert_eq!(claimed, 422);
        assert_eq!(board.free_cells(), 0);
        assert_eq!(board.body_len(), CELLS);
        assert_eq!(board.random_open(&mut rng), None);
    }

    #[test]
    fn random_open_stays_on_open_cells() {
        let mut board = Board::new();
        board.reset(|cell| cell.row % 3 == 0);
        board.seed(Cell::new(1, 1));
        let seed = Cell::new(1, 1);
        assert!(board.advance_head(seed, seed, Cell::new(1, 2)));

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let cell = board.random_open(&mut rng).unwrap();
            assert!(board.is_open(cell));
        }
    }
}
