// Fixed-increment scoring buttons

/// A scoring button on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreButton {
    /// A single matching die
    One,
    /// Hidden unless enabled in the config
    Five,
    /// Rolling 4, 5, 6 in one throw
    FourFiveSix,
    /// Three of the round's number
    Bunco,
}

impl ScoreButton {
    /// All buttons in display order
    pub const ALL: [ScoreButton; 4] = [
        ScoreButton::One,
        ScoreButton::Five,
        ScoreButton::FourFiveSix,
        ScoreButton::Bunco,
    ];

    pub fn points(self) -> i64 {
        match self {
            ScoreButton::One => 1,
            ScoreButton::Five => 5,
            ScoreButton::FourFiveSix => 11,
            ScoreButton::Bunco => 21,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreButton::One => "+1",
            ScoreButton::Five => "+5",
            ScoreButton::FourFiveSix => "4, 5, 6",
            ScoreButton::Bunco => "BUNCO",
        }
    }

    /// Key that presses this button
    pub fn key(self) -> char {
        match self {
            ScoreButton::One => '1',
            ScoreButton::Five => '5',
            ScoreButton::FourFiveSix => '4',
            ScoreButton::Bunco => 'b',
        }
    }

    /// Look up the button bound to `key` among `buttons`
    pub fn from_key(buttons: &[ScoreButton], key: char) -> Option<ScoreButton> {
        let key = key.to_ascii_lowercase();
        buttons.iter().copied().find(|b| b.key() == key)
    }

    /// The buttons shown on the scoreboard
    pub fn layout(show_five: bool) -> Vec<ScoreButton> {
        Self::ALL
            .into_iter()
            .filter(|b| show_five || *b != ScoreButton::Five)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_hides_five() {
        assert_eq!(
            ScoreButton::layout(false),
            vec![ScoreButton::One, ScoreButton::FourFiveSix, ScoreButton::Bunco]
        );
        assert_eq!(ScoreButton::layout(true).len(), 4);
    }

    #[test]
    fn test_from_key_respects_layout() {
        let buttons = ScoreButton::layout(false);
        assert_eq!(ScoreButton::from_key(&buttons, 'B'), Some(ScoreButton::Bunco));
        assert_eq!(ScoreButton::from_key(&buttons, '5'), None);
        assert_eq!(
            ScoreButton::from_key(&ScoreButton::layout(true), '5'),
            Some(ScoreButton::Five)
        );
    }
}
