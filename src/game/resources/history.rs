//! Move history resource

use bevy::prelude::*;
use shakmaty::{Color, Square};

/// One applied half-move
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub san: String,
    pub from: Square,
    pub to: Square,
    pub by: Color,
}

/// Complete record of the match, in order of play
#[derive(Resource, Debug, Default)]
pub struct MoveHistory {
    pub records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// History panel rows: `"1. e4 e5"`, `"2. Nf3 ..."`
    pub fn numbered_rows(&self) -> Vec<String> {
        self.records
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => format!("{}. {} {}", i + 1, white.san, black.san),
                [white] => format!("{}. {}", i + 1, white.san),
                _ => unreachable!(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(san: &str, by: Color) -> MoveRecord {
        MoveRecord {
            san: san.to_string(),
            from: Square::E2,
            to: Square::E4,
            by,
        }
    }

    #[test]
    fn test_numbered_rows_pair_halfmoves() {
        let mut history = MoveHistory::default();
        history.push(record("e4", Color::White));
        history.push(record("e5", Color::Black));
        history.push(record("Nf3", Color::White));

        assert_eq!(history.numbered_rows(), vec!["1. e4 e5", "2. Nf3"]);
        assert_eq!(history.len(), 3);
    }
}
