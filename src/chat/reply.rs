/// Canned assistant answer for a user prompt
pub fn reply_to(prompt: &str) -> String {
    format!(
        "I understand you're interested in \"{}\". Based on your preferences, I'd recommend focusing on properties with good school ratings and reasonable commute times. Would you like me to highlight specific features that matter most to you?",
        prompt
    )
}
