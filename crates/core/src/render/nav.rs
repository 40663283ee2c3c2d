/// Pick the day section closest to the current scroll position.
///
/// `section_offsets` are the top offsets of the day sections in display
/// order; `header_bias` compensates for the sticky navigation bar. Ties
/// resolve to the earlier section. Returns `None` when there are no
/// sections.
///
/// Scroll-driven activation is passive: the caller highlights the returned
/// section without notifying the map collaborator. Explicit click
/// activation goes through the planner and does notify it.
#[must_use]
pub fn active_section_for_scroll(
    section_offsets: &[f64],
    scroll_y: f64,
    header_bias: f64,
) -> Option<usize> {
    let target = scroll_y + header_bias;
    let mut best: Option<(usize, f64)> = None;
    for (index, offset) in section_offsets.iter().enumerate() {
        let diff = (offset - target).abs();
        match best {
            Some((_, closest)) if diff >= closest => {}
            _ => best = Some((index, diff)),
        }
    }
    best.map(|(index, _)| index)
}
