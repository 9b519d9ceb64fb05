//! Character-grid rendering of the circular progress indicator.

/// Grid width in columns
const WIDTH: usize = 21;

/// Grid height in rows
const HEIGHT: usize = 11;

/// Horizontal ring radius in columns; vertical radius is half of it
/// because terminal cells are roughly twice as tall as they are wide
const RADIUS_X: f64 = 9.0;
const RADIUS_Y: f64 = 4.5;

/// Inner and outer edge of the ring band, in normalized radii
const BAND_INNER: f64 = 0.72;
const BAND_OUTER: f64 = 1.08;

const FILL: char = '█';
const TRACK: char = '·';

/// Render the progress ring for a percentage in 0..=100
///
/// The fill sweeps clockwise from twelve o'clock, one cell per ring
/// position, with the percentage label centered inside. Output is a plain
/// multi-line string with no escape codes, safe for any terminal.
pub fn render(percentage: u8) -> String {
    let percentage = percentage.min(100);
    let threshold = f64::from(percentage) * 3.6;

    let cx = (WIDTH as f64 - 1.0) / 2.0;
    let cy = (HEIGHT as f64 - 1.0) / 2.0;

    let mut grid: Vec<Vec<char>> = (0..HEIGHT)
        .map(|row| {
            (0..WIDTH)
                .map(|col| {
                    let dx = (col as f64 - cx) / RADIUS_X;
                    let dy = (row as f64 - cy) / RADIUS_Y;
                    let radius = (dx * dx + dy * dy).sqrt();

                    if !(BAND_INNER..=BAND_OUTER).contains(&radius) {
                        return ' ';
                    }

                    // Clockwise angle from twelve o'clock, 0..360
                    let mut angle = dx.atan2(-dy).to_degrees();
                    if angle < 0.0 {
                        angle += 360.0;
                    }

                    if angle < threshold { FILL } else { TRACK }
                })
                .collect()
        })
        .collect();

    // Percentage label centered on the middle row, inside the band
    let label = format!("{}%", percentage);
    let row = HEIGHT / 2;
    let start = (WIDTH - label.len()) / 2;
    for (offset, ch) in label.chars().enumerate() {
        grid[row][start + offset] = ch;
    }

    let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_count(rendered: &str) -> usize {
        rendered.chars().filter(|&c| c == FILL).count()
    }

    fn track_count(rendered: &str) -> usize {
        rendered.chars().filter(|&c| c == TRACK).count()
    }

    #[test]
    fn test_render_shape() {
        let rendered = render(50);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), HEIGHT);
        for line in lines {
            assert_eq!(line.chars().count(), WIDTH);
        }
    }

    #[test]
    fn test_render_zero_has_no_fill() {
        let rendered = render(0);
        assert_eq!(fill_count(&rendered), 0);
        assert!(track_count(&rendered) > 0);
        assert!(rendered.contains("0%"));
    }

    #[test]
    fn test_render_full_has_no_track() {
        let rendered = render(100);
        assert_eq!(track_count(&rendered), 0);
        assert!(fill_count(&rendered) > 0);
        assert!(rendered.contains("100%"));
    }

    #[test]
    fn test_render_fill_grows_with_percentage() {
        let mut previous = 0;
        for pct in [0u8, 10, 25, 50, 75, 90, 100] {
            let count = fill_count(&render(pct));
            assert!(count >= previous, "fill shrank at {}%", pct);
            previous = count;
        }
    }

    #[test]
    fn test_render_half_is_roughly_balanced() {
        let rendered = render(50);
        let filled = fill_count(&rendered) as i64;
        let track = track_count(&rendered) as i64;
        // Half the ring each way, within a few cells of rasterization slack
        assert!((filled - track).abs() <= 4, "filled={} track={}", filled, track);
    }

    #[test]
    fn test_render_label_present() {
        for pct in [0u8, 7, 42, 99, 100] {
            let rendered = render(pct);
            assert!(rendered.contains(&format!("{}%", pct)), "missing label for {}%", pct);
        }
    }

    #[test]
    fn test_render_clamps_out_of_range() {
        assert_eq!(render(200), render(100));
    }
}
