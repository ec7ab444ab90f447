use std::time::{Duration, Instant};

/// Wall-clock metrics for the session HUD
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub final_score: Option<u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            final_score: None,
        }
    }

    /// Refresh the elapsed timer. Frozen once the final score is recorded,
    /// matching the frozen board.
    pub fn update(&mut self) {
        if self.final_score.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    /// Record the score at game over. The latch only takes the first value;
    /// the game never restarts.
    pub fn on_game_over(&mut self, final_score: u32) {
        if self.final_score.is_none() {
            self.final_score = Some(final_score);
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_final_score_latch() {
        let mut metrics = GameMetrics::new();
        assert_eq!(metrics.final_score, None);

        metrics.on_game_over(170);
        assert_eq!(metrics.final_score, Some(170));

        // Only the first recorded score sticks
        metrics.on_game_over(255);
        assert_eq!(metrics.final_score, Some(170));
    }

    #[test]
    fn test_timer_freezes_at_game_over() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 20);

        metrics.on_game_over(85);
        let frozen = metrics.elapsed_time;
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }
}
