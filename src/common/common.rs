use chrono::Utc;

/// Current unix time in seconds.
pub fn current_time() -> i64 {
    Utc::now().timestamp()
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
