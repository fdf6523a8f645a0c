//! Setup-string parsing and export.
//!
//! A setup string is whitespace separated: a command word (ignored) followed
//! by `<W|B><file><rank>` tokens naming every occupied square, for example
//! `Setup Wa2 Wb2 Bc7`.

use super::{Bitboard, Board, Color, ConfigError, Square};

fn parse_token(token: &str) -> Result<(Color, Square), ConfigError> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != 3 {
        return Err(ConfigError::InvalidToken {
            token: token.to_string(),
        });
    }
    let color = Color::from_char(chars[0]).ok_or_else(|| ConfigError::InvalidColor {
        token: token.to_string(),
        found: chars[0],
    })?;
    if !('a'..='h').contains(&chars[1]) {
        return Err(ConfigError::InvalidFile {
            token: token.to_string(),
            found: chars[1],
        });
    }
    if !('1'..='8').contains(&chars[2]) {
        return Err(ConfigError::InvalidRank {
            token: token.to_string(),
            found: chars[2],
        });
    }
    let sq = Square::from_chars(chars[1], chars[2]).ok_or_else(|| ConfigError::InvalidToken {
        token: token.to_string(),
    })?;
    Ok((color, sq))
}

impl Board {
    /// Replace the position with the pawns named in `setup`.
    ///
    /// Every token is validated before the board is touched; on error the
    /// board is unchanged. On success White is to move, there is no en
    /// passant target and the hash is recomputed from scratch.
    pub fn initialize_custom_board(&mut self, setup: &str) -> Result<(), ConfigError> {
        let mut pawns = [Bitboard::EMPTY; 2];
        for token in setup.split_whitespace().skip(1) {
            let (color, sq) = parse_token(token)?;
            if (pawns[0] | pawns[1]).contains(sq) {
                return Err(ConfigError::DuplicateSquare { square: sq });
            }
            pawns[color.index()] |= Bitboard::from_square(sq);
        }

        self.pawns = pawns;
        self.en_passant_target = None;
        self.current_player = Color::White;
        self.last_move = None;
        self.hash = self.calculate_hash();
        Ok(())
    }

    /// Build a board from a setup string using the default key set.
    pub fn from_setup(setup: &str) -> Result<Board, ConfigError> {
        let mut board = Board::empty();
        board.initialize_custom_board(setup)?;
        Ok(board)
    }

    /// Inverse of `initialize_custom_board`: White tokens then Black tokens,
    /// each in square-index order.
    #[must_use]
    pub fn to_setup_string(&self) -> String {
        let mut out = String::from("Setup");
        for color in Color::BOTH {
            for sq in self.pawns(color).iter() {
                out.push(' ');
                out.push(color.to_char());
                out.push(sq.file_char());
                out.push(sq.rank_char());
            }
        }
        out
    }
}
