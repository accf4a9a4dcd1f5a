//! Countdown formatting.
//!
//! The engine only stores remaining time per player; the external clock
//! drives it through [`Game::tick`](super::Game::tick).

use std::time::Duration;

/// Render a countdown as `MM:SS`, rounding partial seconds up.
///
/// Rounding up means the display reads `00:00` only once time has actually
/// run out.
///
/// ```
/// use std::time::Duration;
/// use santorini_engine::rules::format_clock;
///
/// assert_eq!(format_clock(Duration::from_secs(300)), "05:00");
/// assert_eq!(format_clock(Duration::from_millis(59_001)), "01:00");
/// ```
#[must_use]
pub fn format_clock(remaining: Duration) -> String {
    let mut secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
