use crate::Chips;

/// Everything that can go wrong while setting up or playing a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Accepting the bet would push the table's total wager above its limit.
    LimitExceeded {
        limit: Chips,
        total: Chips,
        amount: Chips,
    },
    /// No outcome with this name is registered on the wheel.
    UnknownOutcome(String),
    /// A configuration value was rejected at construction.
    InvalidConfig(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LimitExceeded {
                limit,
                total,
                amount,
            } => write!(
                f,
                "table limit exceeded: {} on the table + {} > {}",
                total, amount, limit
            ),
            Self::UnknownOutcome(name) => write!(f, "unknown outcome: {}", name),
            Self::InvalidConfig(s) => write!(f, "invalid config: {}", s),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_message_names_all_amounts() {
        let error = Error::LimitExceeded {
            limit: 100,
            total: 80,
            amount: 40,
        };
        assert_eq!(
            error.to_string(),
            "table limit exceeded: 80 on the table + 40 > 100"
        );
    }
}
