/// Direction of the last idle turn.
///
/// The responder alternates turns starting from `Neutral`:
///
/// | current       | turn  | next          |
/// |---------------|-------|---------------|
/// | `Neutral`     | left  | `TurnedLeft`  |
/// | `TurnedLeft`  | right | `Neutral`     |
/// | `TurnedRight` | left  | `Neutral`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnDirection {
    #[default]
    Neutral,
    TurnedLeft,
    TurnedRight,
}

/// A yaw turn; left is a positive rotation about +Y
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    pub fn sign(self) -> f32 {
        match self {
            Turn::Left => 1.0,
            Turn::Right => -1.0,
        }
    }
}

/// What a tap should trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapPhase {
    /// Taps 1 and 2: step cue and an idle turn
    Step(Turn),
    /// Tap 3: climax cue and tilted pose
    Climax,
    /// Tap 4: silent return to neutral, counter cleared
    Reset,
}

/// Per-node tap counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    taps: u8,
    turn: TurnDirection,
}

impl InteractionState {
    /// The tap that resets the cycle
    pub const RESET_TAP: u8 = 4;
    pub const CLIMAX_TAP: u8 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Taps since the last reset, 0..=3
    pub fn taps(&self) -> u8 {
        self.taps
    }

    pub fn turn(&self) -> TurnDirection {
        self.turn
    }

    /// Count a tap and return the response it calls for
    pub fn register_tap(&mut self) -> TapPhase {
        self.taps += 1;
        match self.taps {
            Self::RESET_TAP => {
                self.taps = 0;
                self.turn = TurnDirection::Neutral;
                TapPhase::Reset
            }
            Self::CLIMAX_TAP => TapPhase::Climax,
            _ => {
                let (turn, next) = match self.turn {
                    TurnDirection::Neutral => (Turn::Left, TurnDirection::TurnedLeft),
                    TurnDirection::TurnedLeft => (Turn::Right, TurnDirection::Neutral),
                    TurnDirection::TurnedRight => (Turn::Left, TurnDirection::Neutral),
                };
                self.turn = next;
                TapPhase::Step(turn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_tap_cycle() {
        let mut state = InteractionState::new();
        assert_eq!(state.register_tap(), TapPhase::Step(Turn::Left));
        assert_eq!(state.register_tap(), TapPhase::Step(Turn::Right));
        assert_eq!(state.register_tap(), TapPhase::Climax);
        assert_eq!(state.taps(), 3);
        assert_eq!(state.register_tap(), TapPhase::Reset);
        assert_eq!(state, InteractionState::new());
    }

    #[test]
    fn test_fifth_tap_matches_first() {
        let mut fresh = InteractionState::new();
        let first = fresh.register_tap();

        let mut cycled = InteractionState::new();
        for _ in 0..4 {
            cycled.register_tap();
        }
        assert_eq!(cycled.register_tap(), first);
        assert_eq!(cycled, fresh);
    }

    #[test]
    fn test_consecutive_steps_alternate() {
        let mut state = InteractionState::new();
        let (TapPhase::Step(a), TapPhase::Step(b)) = (state.register_tap(), state.register_tap())
        else {
            panic!("first two taps must be steps");
        };
        assert_eq!(a.sign(), -b.sign());
        assert_eq!(state.turn(), TurnDirection::Neutral);
    }

    #[test]
    fn test_turned_right_goes_left() {
        let mut state = InteractionState {
            taps: 0,
            turn: TurnDirection::TurnedRight,
        };
        assert_eq!(state.register_tap(), TapPhase::Step(Turn::Left));
        assert_eq!(state.turn(), TurnDirection::Neutral);
    }
}
