/// Splits marketing copy on `$` so the parts wrapped in a pair of dollar signs
/// can be drawn in the primary color: `"Earn $more$ today"` highlights `more`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

pub fn highlight_segments(text: &str) -> Vec<Segment> {
    let parts: Vec<&str> = text.split('$').collect();
    let closed = parts.len() % 2 == 1;
    let last = parts.len() - 1;

    let mut segments: Vec<Segment> = Vec::new();
    for (index, part) in parts.into_iter().enumerate() {
        // A dangling `$` has no partner, keep it as literal text.
        let unmatched = !closed && index == last;
        let highlighted = index % 2 == 1 && !unmatched;
        let text = if unmatched { format!("${part}") } else { part.to_string() };
        if text.is_empty() {
            continue;
        }
        match segments.last_mut() {
            Some(prev) if prev.highlighted == highlighted => prev.text.push_str(&text),
            _ => segments.push(Segment { text, highlighted }),
        }
    }
    segments
}
