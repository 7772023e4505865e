/// Which game produced an outcome; selects the per-game win counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    Slots,
    Blackjack,
    Roulette,
    VideoPoker,
    DigTrash,
}

/// Result of one resolved round, as seen by the ledger.
///
/// The stake is debited when the round starts, so the amounts here are
/// what flows back afterwards: a win carries the total credit (stake
/// plus profit), a tie carries the returned stake, and a loss carries
/// the forfeited stake for bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(u64),
    Loss(u64),
    Tie(u64),
}

impl Outcome {
    /// Amount the ledger credits back to the balance.
    pub fn credit(&self) -> u64 {
        match self {
            Outcome::Win(credit) | Outcome::Tie(credit) => *credit,
            Outcome::Loss(_) => 0,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_amounts() {
        assert_eq!(Outcome::Win(200).credit(), 200);
        assert_eq!(Outcome::Tie(100).credit(), 100);
        assert_eq!(Outcome::Loss(100).credit(), 0);
    }

    #[test]
    fn test_is_win() {
        assert!(Outcome::Win(1).is_win());
        assert!(!Outcome::Tie(1).is_win());
        assert!(!Outcome::Loss(1).is_win());
    }
}
