use crate::{Color, Marble, MarbleCounts};

/// The state for a single player during one game.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    color: Color,
    /// Captured marbles, in capture order.
    captured: Vec<Marble>,
}

impl Player {
    pub(crate) fn new(name: &str, color: Color) -> Self {
        Self {
            name: String::from(name),
            color,
            captured: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn captured(&self) -> &[Marble] {
        &self.captured
    }

    pub(crate) fn capture(&mut self, marble: Marble) {
        self.captured.push(marble);
    }

    /// How many marbles of the given color this player has captured.
    pub fn captured_count(&self, marble: Marble) -> usize {
        self.captured.iter().filter(|&&m| m == marble).count()
    }

    pub fn captured_counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for &marble in &self.captured {
            counts.add(marble);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_counting() {
        let mut player = Player::new("ann", Color::White);
        assert_eq!(player.captured_count(Marble::Red), 0);
        player.capture(Marble::Red);
        player.capture(Marble::Black);
        player.capture(Marble::Red);
        assert_eq!(player.captured(), &[Marble::Red, Marble::Black, Marble::Red]);
        assert_eq!(player.captured_count(Marble::Red), 2);
        assert_eq!(
            player.captured_counts(),
            MarbleCounts {
                white: 0,
                black: 1,
                red: 2
            }
        );
    }
}
