/// The player keeps drawing below this total, and it caps the dealer too.
pub const STAND_THRESHOLD: u8 = 17;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
}

/// Fixed player policy: draw to 17. Busted totals stand.
pub fn player_action(score: u8) -> Action {
    if score < STAND_THRESHOLD {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// Fixed dealer policy: stand once the player's final total is matched,
/// or on 17, whichever comes first.
pub fn dealer_action(score: u8, player_score: u8) -> Action {
    if score >= player_score || score >= STAND_THRESHOLD {
        Action::Stand
    } else {
        Action::Hit
    }
}
