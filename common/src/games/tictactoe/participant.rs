use std::fmt;
use std::str::FromStr;

/// Computer difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotType {
    Random,
    Heuristic,
    Minimax,
}

impl BotType {
    /// Difficulty name used on the command line and in move announcements.
    pub fn level(self) -> &'static str {
        match self {
            BotType::Random => "easy",
            BotType::Heuristic => "medium",
            BotType::Minimax => "hard",
        }
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotType::Random => "random",
            BotType::Heuristic => "heuristic",
            BotType::Minimax => "minimax",
        };
        write!(f, "{}", name)
    }
}

/// Who produces moves for one side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    Bot(BotType),
    Human,
}

impl Participant {
    pub const ALL: [Participant; 4] = [
        Participant::Bot(BotType::Random),
        Participant::Bot(BotType::Heuristic),
        Participant::Bot(BotType::Minimax),
        Participant::Human,
    ];

    /// Name accepted by `start` on the command line.
    pub fn role(self) -> &'static str {
        match self {
            Participant::Bot(bot_type) => bot_type.level(),
            Participant::Human => "user",
        }
    }
}

impl FromStr for Participant {
    type Err = String;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        Participant::ALL
            .into_iter()
            .find(|participant| participant.role() == role)
            .ok_or_else(|| {
                format!(
                    "Unknown role '{}', expected one of: {}",
                    role,
                    Participant::ALL.map(Participant::role).join(", ")
                )
            })
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Bot(bot_type) => write!(f, "{} bot", bot_type),
            Participant::Human => write!(f, "human"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_map_to_participants() {
        assert_eq!("easy".parse::<Participant>(), Ok(Participant::Bot(BotType::Random)));
        assert_eq!("medium".parse::<Participant>(), Ok(Participant::Bot(BotType::Heuristic)));
        assert_eq!("hard".parse::<Participant>(), Ok(Participant::Bot(BotType::Minimax)));
        assert_eq!("user".parse::<Participant>(), Ok(Participant::Human));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("expert".parse::<Participant>().is_err());
        assert!("Easy".parse::<Participant>().is_err());
        assert!("".parse::<Participant>().is_err());
        assert_eq!(
            "expert".parse::<Participant>(),
            Err("Unknown role 'expert', expected one of: easy, medium, hard, user".to_string())
        );
    }

    #[test]
    fn test_role_round_trips() {
        for participant in Participant::ALL {
            assert_eq!(participant.role().parse::<Participant>(), Ok(participant));
        }
    }
}
