use ulid::Ulid;

use crate::model::{Ms, Reservation, Tool};
use crate::window::{TimeWindow, ViewMode, date_of};

/// How lanes are assigned when projecting onto a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One lane per tool in roster order — the single-day view.
    ToolRows,
    /// One lane per day of the window — week hour grid and month cells.
    DayRows,
}

/// Renderable geometry for one reservation.
///
/// `offset` and `extent` are fractions of the lane's time axis: the whole
/// window span for [`Axis::ToolRows`], one day's hour grid for
/// [`Axis::DayRows`]. Month windows carry no sub-day position, so both are
/// zero there and only `lane`/`stack` matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub reservation_id: Ulid,
    pub tool_id: Ulid,
    pub user_id: Ulid,
    /// Tool index (ToolRows) or day index (DayRows) within the window.
    pub lane: usize,
    pub offset: f64,
    pub extent: f64,
    /// Insertion-order position among blocks sharing the lane.
    pub stack: usize,
}

/// Project reservations onto the window as positioned blocks.
///
/// Best-effort visualization: reservations outside the window or referencing
/// a tool missing from the roster are silently dropped, partial overlaps are
/// clipped to the visible range (offsets are never negative), and input order
/// is preserved so creation order determines stacking.
pub fn layout(
    window: &TimeWindow,
    axis: Axis,
    reservations: &[Reservation],
    tools: &[Tool],
) -> Vec<Block> {
    match axis {
        Axis::ToolRows => tool_rows(window, reservations, tools),
        Axis::DayRows => day_rows(window, reservations, tools),
    }
}

/// One horizontal lane per tool; position is a linear projection of time onto
/// the window span. Same-tool overlaps are already forbidden by validation,
/// so no intra-lane collision resolution happens here.
fn tool_rows(window: &TimeWindow, reservations: &[Reservation], tools: &[Tool]) -> Vec<Block> {
    let win = window.span();
    let mut lane_depth = vec![0usize; tools.len()];
    let mut blocks = Vec::new();

    for res in reservations {
        let Some(lane) = tools.iter().position(|t| t.id == res.tool_id) else {
            continue; // dangling tool reference
        };
        let Some(visible) = res.span.intersect(&win) else {
            continue;
        };
        blocks.push(Block {
            reservation_id: res.id,
            tool_id: res.tool_id,
            user_id: res.user_id,
            lane,
            offset: fraction(visible.start - win.start, win.duration_ms()),
            extent: fraction(visible.duration_ms(), win.duration_ms()),
            stack: next_in_lane(&mut lane_depth, lane),
        });
    }
    blocks
}

/// One lane per day; a reservation lands in its start day's lane. Day/week
/// windows position it vertically on that day's hour grid; month windows
/// reduce it to a label entry with no sub-day geometry. Spans crossing
/// midnight are clipped to the day they begin on.
fn day_rows(window: &TimeWindow, reservations: &[Reservation], tools: &[Tool]) -> Vec<Block> {
    let month = window.mode() == ViewMode::Month;
    let mut lane_depth = vec![0usize; window.days().len()];
    let mut blocks = Vec::new();

    for res in reservations {
        if !tools.iter().any(|t| t.id == res.tool_id) {
            continue; // dangling tool reference
        }
        let Some(start_day) = date_of(res.span.start) else {
            continue;
        };
        let Some(lane) = window.day_index(start_day) else {
            continue; // begins outside the window
        };

        let geometry = if month {
            Some((0.0, 0.0))
        } else {
            let grid = TimeWindow::hour_grid(start_day);
            res.span.intersect(&grid).map(|visible| {
                (
                    fraction(visible.start - grid.start, grid.duration_ms()),
                    fraction(visible.duration_ms(), grid.duration_ms()),
                )
            })
        };
        let Some((offset, extent)) = geometry else {
            continue; // entirely outside operating hours
        };

        blocks.push(Block {
            reservation_id: res.id,
            tool_id: res.tool_id,
            user_id: res.user_id,
            lane,
            offset,
            extent,
            stack: next_in_lane(&mut lane_depth, lane),
        });
    }
    blocks
}

fn fraction(part: Ms, total: Ms) -> f64 {
    part as f64 / total as f64
}

fn next_in_lane(lane_depth: &mut [usize], lane: usize) -> usize {
    let stack = lane_depth[lane];
    lane_depth[lane] += 1;
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HOUR_MS, Span};
    use crate::window::day_start_ms;
    use chrono::NaiveDate;

    const H: Ms = HOUR_MS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation(tool: &Tool, start: Ms, end: Ms) -> Reservation {
        Reservation {
            id: Ulid::new(),
            tool_id: tool.id,
            user_id: Ulid::new(),
            span: Span::new(start, end),
            notes: None,
        }
    }

    fn at(day: NaiveDate, hour: Ms) -> Ms {
        day_start_ms(day) + hour * H
    }

    #[test]
    fn tool_rows_full_window_fills_lane() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let tool = Tool::new("GPT-4 Turbo", "#3b82f6");
        let span = window.span();
        let res = vec![reservation(&tool, span.start, span.end)];

        let blocks = layout(&window, Axis::ToolRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lane, 0);
        assert_eq!(blocks[0].offset, 0.0);
        assert_eq!(blocks[0].extent, 1.0);
    }

    #[test]
    fn tool_rows_projects_proportionally() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let tools = vec![Tool::new("A", "#111"), Tool::new("B", "#222")];
        let res = vec![reservation(&tools[1], at(day, 9), at(day, 12))];

        let blocks = layout(&window, Axis::ToolRows, &res, &tools);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lane, 1);
        assert_eq!(blocks[0].offset, 9.0 / 24.0);
        assert_eq!(blocks[0].extent, 3.0 / 24.0);
    }

    #[test]
    fn tool_rows_clips_at_window_start() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let tool = Tool::new("A", "#111");
        // 23:00 previous day to 01:00
        let res = vec![reservation(&tool, at(day, -1), at(day, 1))];

        let blocks = layout(&window, Axis::ToolRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].offset, 0.0);
        assert_eq!(blocks[0].extent, 1.0 / 24.0);
    }

    #[test]
    fn tool_rows_drops_dangling_tool() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let gone = Tool::new("removed", "#000");
        let res = vec![reservation(&gone, at(day, 9), at(day, 10))];

        let blocks = layout(&window, Axis::ToolRows, &res, &[Tool::new("A", "#111")]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn tool_rows_excludes_outside_window() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let tool = Tool::new("A", "#111");
        let res = vec![
            reservation(&tool, at(day, -5), at(day, -2)),
            reservation(&tool, at(day, 25), at(day, 27)),
            // touching the window start, half-open: still invisible
            reservation(&tool, at(day, -2), at(day, 0)),
        ];

        let blocks = layout(&window, Axis::ToolRows, &res, &[tool]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn stacking_follows_insertion_order() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::day(day);
        let tools = vec![Tool::new("A", "#111"), Tool::new("B", "#222")];
        let res = vec![
            reservation(&tools[0], at(day, 9), at(day, 10)),
            reservation(&tools[1], at(day, 9), at(day, 10)),
            reservation(&tools[0], at(day, 11), at(day, 12)),
        ];

        let blocks = layout(&window, Axis::ToolRows, &res, &tools);
        assert_eq!(blocks.len(), 3);
        // blocks come back in input order
        assert_eq!(blocks[0].reservation_id, res[0].id);
        assert_eq!(blocks[1].reservation_id, res[1].id);
        assert_eq!(blocks[2].reservation_id, res[2].id);
        // per-lane stacks count independently
        assert_eq!(blocks[0].stack, 0);
        assert_eq!(blocks[1].stack, 0);
        assert_eq!(blocks[2].stack, 1);
    }

    #[test]
    fn layout_is_idempotent() {
        let day = date(2024, 1, 10);
        let window = TimeWindow::week(day);
        let tool = Tool::new("A", "#111");
        let res = vec![
            reservation(&tool, at(day, 9), at(day, 10)),
            reservation(&tool, at(day, 13), at(day, 15)),
        ];
        let tools = vec![tool];

        let first = layout(&window, Axis::DayRows, &res, &tools);
        let second = layout(&window, Axis::DayRows, &res, &tools);
        assert_eq!(first, second);
    }

    #[test]
    fn day_rows_places_on_start_day_grid() {
        // week of Mon 2024-01-08; reservation Tue 09:00-10:30
        let tuesday = date(2024, 1, 9);
        let window = TimeWindow::week(date(2024, 1, 10));
        let tool = Tool::new("A", "#111");
        let res = vec![reservation(&tool, at(tuesday, 9), at(tuesday, 9) + H / 2 + H)];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lane, 1); // Tuesday
        assert_eq!(blocks[0].offset, 4.0 / 19.0); // 09:00 is 4h past 05:00
        assert_eq!(blocks[0].extent, 1.5 / 19.0);
    }

    #[test]
    fn day_rows_clips_before_opening() {
        let day = date(2024, 1, 8);
        let window = TimeWindow::week(day);
        let tool = Tool::new("A", "#111");
        // 04:00-06:00, grid opens at 05:00
        let res = vec![reservation(&tool, at(day, 4), at(day, 6))];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].offset, 0.0);
        assert_eq!(blocks[0].extent, 1.0 / 19.0);
    }

    #[test]
    fn day_rows_clips_cross_midnight_to_start_day() {
        let monday = date(2024, 1, 8);
        let window = TimeWindow::week(monday);
        let tool = Tool::new("A", "#111");
        // 22:00 Monday to 01:00 Tuesday — spillover is clipped, not split
        let res = vec![reservation(&tool, at(monday, 22), at(monday, 25))];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lane, 0);
        assert_eq!(blocks[0].offset, 17.0 / 19.0);
        assert_eq!(blocks[0].extent, 2.0 / 19.0);
    }

    #[test]
    fn day_rows_excludes_outside_operating_hours() {
        let day = date(2024, 1, 8);
        let window = TimeWindow::week(day);
        let tool = Tool::new("A", "#111");
        // 03:00-04:30, entirely before opening
        let res = vec![reservation(&tool, at(day, 3), at(day, 4) + H / 2)];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn day_rows_excludes_start_day_outside_window() {
        let window = TimeWindow::week(date(2024, 1, 8));
        let tool = Tool::new("A", "#111");
        // begins Sunday the 7th, ends inside the window
        let sunday = date(2024, 1, 7);
        let res = vec![reservation(&tool, at(sunday, 23), at(sunday, 26))];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn month_cells_have_no_sub_day_geometry() {
        let window = TimeWindow::month(date(2024, 2, 15));
        let tool = Tool::new("A", "#111");
        let day = date(2024, 2, 14);
        let res = vec![
            reservation(&tool, at(day, 9), at(day, 10)),
            reservation(&tool, at(day, 11), at(day, 12)),
        ];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert_eq!(blocks.len(), 2);
        let lane = window.day_index(day).unwrap();
        for b in &blocks {
            assert_eq!(b.lane, lane);
            assert_eq!(b.offset, 0.0);
            assert_eq!(b.extent, 0.0);
        }
        // same cell stacks in insertion order
        assert_eq!(blocks[0].stack, 0);
        assert_eq!(blocks[1].stack, 1);
    }

    #[test]
    fn month_includes_padding_days() {
        // Jan 31 2024 falls in the padding of the February window
        let window = TimeWindow::month(date(2024, 2, 15));
        let tool = Tool::new("A", "#111");
        let padding_day = date(2024, 1, 31);
        let res = vec![reservation(&tool, at(padding_day, 9), at(padding_day, 10))];

        let blocks = layout(&window, Axis::DayRows, &res, &[tool]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lane, window.day_index(padding_day).unwrap());
    }
}
