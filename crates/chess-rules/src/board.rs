//! Board state.

use crate::config::{ProbeStrategy, RulesConfig};
use crate::event::Event;
use crate::piece::{Piece, PieceId};
use crate::sequence::Sequence;
use crate::{check, player, referee, RulesError};
use chess_core::{Color, Layout, PieceKind, Placement, Position};

/// A position on the board together with its occupant, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    position: Position,
    occupant: Option<PieceId>,
}

impl Square {
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Read-only view of a piece for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
}

/// The pieces a board started from, used to replay its history.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Setup {
    placements: Vec<Placement>,
    side_to_move: Color,
}

/// A chess board: piece arena, grid, rosters, captures, side to move and history.
///
/// Pieces live in a single arena; the grid and the rosters store [`PieceId`]s
/// into it, so relocating a piece updates every view at once. Every occupant
/// of the grid appears exactly once in the active roster of its color, and
/// every roster entry sits on the grid square matching its position.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    /// Indexed `[row][col]`, see [`Position::index`].
    pub(crate) grid: [[Option<PieceId>; 8]; 8],
    pub(crate) active: [Vec<PieceId>; 2],
    pub(crate) captured: [Vec<PieceId>; 2],
    pub(crate) side_to_move: Color,
    pub(crate) sequence: Sequence,
    setup: Setup,
    config: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_setup(
            Setup {
                placements: Layout::standard().placements().to_vec(),
                side_to_move: Color::White,
            },
            RulesConfig::default(),
        )
    }

    /// Creates an empty board, White to move.
    pub fn empty() -> Self {
        Self::from_setup(
            Setup {
                placements: Vec::new(),
                side_to_move: Color::White,
            },
            RulesConfig::default(),
        )
    }

    /// Creates a board from a piece-placement layout such as
    /// `"r3k2r/8/8/8/8/8/8/R3K2R"`. Every piece counts as un-moved.
    pub fn from_layout(placement: &str, side_to_move: Color) -> Result<Self, RulesError> {
        let layout = Layout::parse(placement)?;
        Ok(Self::from_setup(
            Setup {
                placements: layout.placements().to_vec(),
                side_to_move,
            },
            RulesConfig::default(),
        ))
    }

    /// Plays the given moves from the standard position, validating each.
    pub fn from_moves(moves: &[(Position, Position)]) -> Result<Self, RulesError> {
        let mut board = Self::new();
        for &(from, to) in moves {
            board.apply_move(from, to)?;
        }
        Ok(board)
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    fn from_setup(setup: Setup, config: RulesConfig) -> Self {
        let mut board = Board {
            pieces: Vec::with_capacity(setup.placements.len()),
            grid: [[None; 8]; 8],
            active: [Vec::new(), Vec::new()],
            captured: [Vec::new(), Vec::new()],
            side_to_move: setup.side_to_move,
            sequence: Sequence::new(),
            setup: Setup {
                placements: Vec::new(),
                side_to_move: setup.side_to_move,
            },
            config,
        };
        for placement in setup.placements {
            board.insert(placement);
        }
        board
    }

    fn insert(&mut self, placement: Placement) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces
            .push(Piece::new(placement.kind, placement.color, placement.position));
        let (row, col) = placement.position.index();
        self.grid[row][col] = Some(id);
        self.active[placement.color.index()].push(id);
        self.setup.placements.push(placement);
        id
    }

    /// Adds a piece to a board on which no move has been played yet.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        position: Position,
    ) -> Result<PieceId, RulesError> {
        if !self.sequence.is_empty() {
            return Err(RulesError::InvalidSetup(
                "cannot place pieces after play has begun".to_string(),
            ));
        }
        if self.id_at(position).is_some() {
            return Err(RulesError::InvalidSetup(format!("{} is occupied", position)));
        }
        Ok(self.insert(Placement {
            kind,
            color,
            position,
        }))
    }

    /// Sets the side to move on a board on which no move has been played yet.
    pub fn set_side_to_move(&mut self, color: Color) -> Result<(), RulesError> {
        if !self.sequence.is_empty() {
            return Err(RulesError::InvalidSetup(
                "cannot change the side to move after play has begun".to_string(),
            ));
        }
        self.side_to_move = color;
        self.setup.side_to_move = color;
        Ok(())
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// The side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Move history.
    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Returns a piece from the arena. Ids come from this board or one of its
    /// clones or replays.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    /// The square at `position` with its occupant.
    #[inline]
    pub fn square(&self, position: Position) -> Square {
        Square {
            position,
            occupant: self.id_at(position),
        }
    }

    #[inline]
    pub fn id_at(&self, position: Position) -> Option<PieceId> {
        let (row, col) = position.index();
        self.grid[row][col]
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.id_at(position).map(|id| self.piece(id))
    }

    /// Pieces of `color` still on the board.
    pub fn active(&self, color: Color) -> &[PieceId] {
        &self.active[color.index()]
    }

    /// Pieces of `color` that have been captured, in capture order.
    pub fn captured(&self, color: Color) -> &[PieceId] {
        &self.captured[color.index()]
    }

    /// Total value of the pieces of `color` that have been captured.
    pub fn captured_material(&self, color: Color) -> u32 {
        self.captured(color)
            .iter()
            .map(|&id| self.piece(id).value())
            .sum()
    }

    /// The king of `color`, if it is on the board.
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.active(color)
            .iter()
            .copied()
            .find(|&id| self.piece(id).kind == PieceKind::King)
    }

    /// Returns true if the piece has moved at any point in the history.
    pub fn has_moved(&self, id: PieceId) -> bool {
        self.sequence.touches(id)
    }

    /// Read-only snapshot of the grid, indexed `[row][col]`.
    pub fn to_grid(&self) -> [[Option<PieceView>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                out[row][col] = cell.map(|id| {
                    let piece = self.piece(id);
                    PieceView {
                        kind: piece.kind,
                        color: piece.color,
                    }
                });
            }
        }
        out
    }

    /// Legal destinations for the piece on `position`; empty if there is none.
    pub fn legal_moves(&self, position: Position) -> Vec<Position> {
        match self.id_at(position) {
            Some(id) => referee::legal_moves(self, id, false)
                .into_iter()
                .map(|sq| sq.position())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Validates a move for the side to move and applies it.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<(), RulesError> {
        let illegal = RulesError::IllegalMove { from, to };

        let Some(id) = self.id_at(from) else {
            tracing::warn!(%from, %to, "no piece on departure square");
            return Err(illegal);
        };
        if self.piece(id).color != self.side_to_move {
            tracing::warn!(%from, %to, side = %self.side_to_move, "piece does not belong to the side to move");
            return Err(illegal);
        }
        let legal = referee::legal_moves(self, id, false);
        if !legal.iter().any(|sq| sq.position() == to) {
            tracing::warn!(%from, %to, "move not in legal set");
            return Err(illegal);
        }

        let event = Event::new(self, from, to);
        let record = player::apply(self, event)?;
        tracing::debug!(
            side = %record.color,
            piece = %record.kind,
            %from,
            %to,
            capture = record.is_capture(),
            special = ?record.special,
            "applied move"
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(())
    }

    /// Parses two algebraic squares and applies the move between them.
    pub fn play(&mut self, from: &str, to: &str) -> Result<(), RulesError> {
        let from = Position::parse(from)?;
        let to = Position::parse(to)?;
        self.apply_move(from, to)
    }

    /// Returns true if the king of `color` is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        check::in_check(self, color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn in_checkmate(&self, color: Color) -> bool {
        check::in_checkmate(self, color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn in_stalemate(&self, color: Color) -> bool {
        check::in_stalemate(self, color)
    }

    /// An independent scratch copy for hypothetical moves, built according to
    /// the configured [`ProbeStrategy`].
    ///
    /// # Panics
    ///
    /// Panics if replaying the history does not reproduce this board, which
    /// indicates a corrupted board.
    pub fn probe(&self) -> Board {
        match self.config.probe {
            ProbeStrategy::Clone => self.clone(),
            ProbeStrategy::Replay => match self.replay() {
                Ok(board) => board,
                Err(err) => panic!("replay diverged from the live board: {err}"),
            },
        }
    }

    /// Rebuilds this board from its initial setup by replaying its history.
    pub fn replay(&self) -> Result<Board, RulesError> {
        let mut board = Self::from_setup(self.setup.clone(), self.config);
        for record in &self.sequence {
            let event = Event::new(&board, record.from, record.to);
            let replayed = player::apply(&mut board, event)?;
            if replayed != *record {
                return Err(RulesError::AmbiguousState(format!(
                    "replayed move {} diverged",
                    record
                )));
            }
        }
        Ok(board)
    }

    /// Checks that the grid and the rosters agree.
    pub fn check_invariants(&self) -> Result<(), RulesError> {
        let fail = |msg: String| Err(RulesError::AmbiguousState(msg));

        for position in Position::all() {
            let Some(id) = self.id_at(position) else {
                continue;
            };
            let piece = self.piece(id);
            if !piece.active {
                return fail(format!("captured piece on {}", position));
            }
            if piece.position != position {
                return fail(format!(
                    "piece on {} believes it is on {}",
                    position, piece.position
                ));
            }
            let listed = self.active(piece.color).iter().filter(|&&a| a == id).count();
            if listed != 1 {
                return fail(format!("piece on {} listed {} times", position, listed));
            }
        }

        for color in Color::ALL {
            for &id in self.active(color) {
                let piece = self.piece(id);
                if piece.color != color || !piece.active {
                    return fail(format!("roster of {} holds a foreign piece", color));
                }
                if self.id_at(piece.position) != Some(id) {
                    return fail(format!("{} roster entry off its square", color));
                }
            }
            for &id in self.captured(color) {
                if self.piece(id).active {
                    return fail(format!("captured {} piece still active", color));
                }
            }
        }

        Ok(())
    }
}

impl PartialEq for Board {
    /// Boards are equal when their game state matches; configuration is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.grid == other.grid
            && self.active == other.active
            && self.captured == other.captured
            && self.side_to_move == other.side_to_move
            && self.sequence == other.sequence
    }
}

impl Eq for Board {}
